//! HTTP fetching with fixed-delay pacing.
//!
//! All page downloads in the crawler go through the [`Fetch`] trait. The
//! production implementation, [`HttpFetcher`], wraps a shared
//! [`reqwest::Client`] that identifies itself with a browser `User-Agent`
//! and sleeps a fixed delay after every request — the crawler's only
//! politeness mechanism, so it applies whether the request succeeded or not.
//!
//! The trait seam exists so the pagination and extraction loops can be
//! driven by scripted fetchers in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

/// Browser identification sent with every request. Naver serves different
/// (and sometimes empty) markup to clients without a realistic User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36";

/// Failure to retrieve a page's text.
///
/// Both variants name the URL so callers can log a useful diagnostic before
/// moving on; no fetch failure is fatal to a crawl.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response (connect error, timeout,
    /// body read failure).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: StatusCode },
}

/// A source of page text keyed by URL.
#[async_trait]
pub trait Fetch {
    /// Fetch the body of `url` as text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Real HTTP fetcher with a fixed post-request delay.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    delay: Duration,
}

impl HttpFetcher {
    /// Build a fetcher that sleeps `delay` after each request.
    pub fn new(delay: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, delay })
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let result = self.get_text(url).await;
        debug!(%url, ok = result.is_ok(), "Fetched page");

        // The delay paces the whole crawl, so it runs on the failure path too.
        tokio::time::sleep(self.delay).await;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_names_url() {
        let err = FetchError::Status {
            url: "https://finance.naver.com/news".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        let message = err.to_string();
        assert!(message.contains("https://finance.naver.com/news"));
        assert!(message.contains("404"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_runs_after_failed_fetch() {
        let delay = Duration::from_millis(1500);
        let fetcher = HttpFetcher::new(delay).unwrap();

        let start = tokio::time::Instant::now();
        // A relative URL fails inside the client before any network I/O, so
        // under the paused clock the only time that can pass is the sleep.
        let result = fetcher.fetch_text("not-a-valid-url").await;

        assert!(matches!(result, Err(FetchError::Request { .. })));
        assert!(start.elapsed() >= delay);
    }
}

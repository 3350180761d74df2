//! JSON output generation.
//!
//! Serializes the crawl result to a single JSON document of the form
//! `{"news": [{"title": ..., "content": ..., "publish_date": ...}, ...]}`.
//! Non-ASCII text is emitted literally (serde_json does not escape it), so
//! the Korean article text stays readable in the output.

use crate::models::NewsFeed;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Render a [`NewsFeed`] as a pretty-printed JSON string.
pub fn render_news_feed(feed: &NewsFeed) -> serde_json::Result<String> {
    serde_json::to_string_pretty(feed)
}

/// Write a rendered [`NewsFeed`] to `path`.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_news_feed(feed: &NewsFeed, path: &str) -> Result<(), Box<dyn Error>> {
    let json = render_news_feed(feed)?;

    info!(articles = feed.news.len(), "Writing JSON");
    if let Err(e) = fs::write(path, json).await {
        error!(error = %e, "Failed to write JSON file");
        return Err(e.into());
    }
    info!("Wrote JSON file");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleRecord;

    #[test]
    fn test_render_empty_feed() {
        let feed = NewsFeed { news: vec![] };
        let json = render_news_feed(&feed).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed["news"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_render_preserves_korean_text_and_nulls() {
        let feed = NewsFeed {
            news: vec![ArticleRecord {
                title: Some("환율 급등".to_string()),
                content: None,
                publish_date: Some("2025-03-01 09:30:01".to_string()),
            }],
        };

        let json = render_news_feed(&feed).unwrap();
        assert!(json.contains("환율 급등"));
        assert!(json.contains(r#""content": null"#));
    }
}

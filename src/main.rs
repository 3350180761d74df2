//! # Naver Finance News Crawler
//!
//! Collects financial news article links from the Naver Finance news listing
//! site, deduplicates them, then fetches each article page and extracts its
//! title, body, and publish date into a single JSON document.
//!
//! ## Usage
//!
//! ```sh
//! naver_finance_news                 # JSON to stdout
//! naver_finance_news -o news.json    # JSON to a file
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Link collection**: walk each listing tab's pages until the pagination
//!    converges, normalizing and deduplicating article links
//! 2. **Extraction**: fetch every collected article page and extract its
//!    fields, tolerating missing markup
//! 3. **Output**: serialize the articles as `{"news": [...]}` JSON
//!
//! Fetching is strictly sequential with a fixed delay after every request —
//! the crawler's sole politeness mechanism.

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod fetcher;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use fetcher::HttpFetcher;
use models::NewsFeed;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("naver_finance_news starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(
        args.max_pages,
        args.fetch_delay_ms,
        output = ?args.output,
        "Parsed CLI arguments"
    );

    let fetcher = HttpFetcher::new(Duration::from_millis(args.fetch_delay_ms))?;

    // ---- Collect article links from every tab ----
    let links = scrapers::naver_finance::collect_news_links(&fetcher, args.max_pages).await;
    info!(count = links.len(), "Collected article links");

    // ---- Fetch and extract article contents ----
    let articles = scrapers::naver_finance::fetch_articles(&fetcher, &links).await;
    info!(count = articles.len(), "Extracted articles");

    // ---- JSON output ----
    let feed = NewsFeed { news: articles };
    match args.output {
        Some(ref path) => outputs::json::write_news_feed(&feed, path).await?,
        None => println!("{}", outputs::json::render_news_feed(&feed)?),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        links = links.len(),
        articles = feed.news.len(),
        "Crawl complete"
    );

    Ok(())
}

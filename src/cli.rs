//! Command-line interface definitions for the Naver Finance news crawler.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the crawler.
///
/// The defaults reproduce the reference crawl behavior: a 1.5 second pause
/// after every request and a generous but bounded page limit per tab.
///
/// # Examples
///
/// ```sh
/// # Crawl with defaults, JSON to stdout
/// naver_finance_news
///
/// # Faster pacing and a tighter page bound, JSON to a file
/// naver_finance_news --fetch-delay-ms 500 --max-pages 10 -o news.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Maximum number of listing pages to fetch per tab.
    ///
    /// Pagination normally stops on its own when a page yields no new links;
    /// this bound guards against sites that never converge.
    #[arg(long, default_value_t = 50)]
    pub max_pages: u32,

    /// Delay in milliseconds applied after every HTTP request
    #[arg(long, default_value_t = 1500)]
    pub fetch_delay_ms: u64,

    /// Path for the JSON output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,
}

//! Site scrapers for collecting article links and contents.
//!
//! Each scraper follows a consistent two-phase pattern:
//!
//! 1. **Link collection**: walk the site's paginated listing pages and
//!    gather deduplicated canonical article URLs
//! 2. **Extraction**: download each article page and pull out its fields
//!
//! Scrapers fetch through the [`crate::fetcher::Fetch`] seam, handle
//! failures gracefully (a failed fetch is logged and skipped, never fatal),
//! and tolerate missing markup by recording absent fields.

pub mod naver_finance;

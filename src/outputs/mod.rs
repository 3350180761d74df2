//! Output generation.
//!
//! # Submodules
//!
//! - [`json`]: renders the crawl result as the `{"news": [...]}` JSON
//!   document and writes it to a file when one is requested

pub mod json;

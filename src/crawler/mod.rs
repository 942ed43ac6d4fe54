//! Crawler module for page fetching and processing
//!
//! This module contains the acquisition half of the pipeline:
//! - HTTP downloading with a `Name/Version` user agent
//! - HTML text and link extraction
//! - The FIFO frontier driving breadth-first traversal
//! - Crawl and index coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{crawl, index_urls, Coordinator, CrawlSummary, IndexReport};
pub use fetcher::{build_http_client, download};
pub use frontier::Frontier;
pub use parser::{extract, Extraction};

//! Output module for query results and run reports
//!
//! This module handles:
//! - Encoding search hits as the JSON array served to clients
//! - Printing index statistics and crawl summaries

mod json;
pub mod stats;

pub use json::hits_to_json;
pub use stats::{format_statistics, format_summary, print_statistics, print_summary};

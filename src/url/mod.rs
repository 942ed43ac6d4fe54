//! URL handling module for Ripple-Search
//!
//! This module resolves raw anchor hrefs against the page they were found on
//! and decides whether a resolved URL stays inside the crawl's host scope.

mod resolve;
mod scope;

// Re-export main functions
pub use resolve::clean_href;
pub use scope::HostScope;

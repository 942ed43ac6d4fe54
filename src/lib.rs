//! Ripple-Search: a host-scoped crawler with a TF-IDF index
//!
//! This crate crawls a bounded, breadth-first slice of a single site, extracts the
//! visible text of every page it reaches, and ranks pages for single-term queries
//! by TF-IDF. The index is one contract with two interchangeable backends: a
//! volatile in-memory store and a persisted SQLite store.

pub mod analysis;
pub mod config;
pub mod crawler;
pub mod index;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Ripple-Search operations
#[derive(Debug, Error)]
pub enum RippleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Crawl error: {0}")]
    Crawl(#[from] CrawlError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Index error: {0}")]
    Index(#[from] index::IndexError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors that abort a crawl before it starts
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Invalid start URL '{url}': {source}")]
    InvalidStartUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Start URL has no host: {0}")]
    MissingHost(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors raised while downloading a single page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },
}

/// Result type alias for Ripple-Search operations
pub type Result<T> = std::result::Result<T, RippleError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analysis::{Normalizer, Stopwords};
pub use config::Config;
pub use crawler::{crawl, Coordinator, CrawlSummary};
pub use index::{open_index, Hit, InMemoryIndex, SearchIndex, SqliteIndex};
pub use url::clean_href;

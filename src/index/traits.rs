//! Index contract and error types
//!
//! This module defines the trait every index backend implements and the
//! types that cross it.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during index operations
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("The persisted backend requires a database path")]
    MissingDatabasePath,
}

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

/// A scored search result
///
/// Serializes as `{"URL": ..., "Score": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    #[serde(rename = "URL")]
    pub url: String,

    #[serde(rename = "Score")]
    pub score: f64,
}

/// Entity counts held by an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub documents: u64,
    pub terms: u64,
    pub postings: u64,
}

/// Trait for index backend implementations
///
/// All backends behave identically: same normalization, same statistics,
/// same scores and ordering. Writes must be serialized by the caller; reads
/// are safe to share while no write is in flight.
pub trait SearchIndex: Send {
    /// Adds a document under `url`
    ///
    /// Each raw word is lowercased, stopword-filtered and stemmed; surviving
    /// terms are counted into postings and the document length. Adding a URL
    /// that is already present is a no-op. Either the whole document is
    /// recorded or nothing is.
    fn add_document(&mut self, url: &str, words: &[String]) -> IndexResult<()>;

    /// Ranks documents for a single term by TF-IDF
    ///
    /// Returns an empty result for an empty term, an empty index, a stopword,
    /// or a term never observed. Hits are ordered by score descending, then
    /// URL ascending.
    fn search(&self, term: &str) -> IndexResult<Vec<Hit>>;

    /// Total number of distinct documents added
    fn document_count(&self) -> IndexResult<u64>;

    /// Counts of documents, terms and postings
    fn stats(&self) -> IndexResult<IndexStats>;

    /// Releases backend resources
    fn close(self: Box<Self>) -> IndexResult<()>;
}

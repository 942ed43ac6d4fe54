//! Term-statistics index with interchangeable backends
//!
//! This module provides the `SearchIndex` contract and its two backends:
//! - `InMemoryIndex` - volatile maps, single writer, lost on exit
//! - `SqliteIndex` - the canonical relational schema, one transaction per document
//!
//! Both backends share the normalization pipeline, the per-document term
//! counting and the TF-IDF ranker, so the same sequence of `add_document`
//! calls yields identical `search` results on either one.

mod document;
mod memory;
mod ranker;
mod schema;
mod sqlite;
mod traits;

pub use document::DocumentTerms;
pub use memory::InMemoryIndex;
pub use ranker::{compare_hits, idf, rank, tf_idf};
pub use schema::{initialize_schema, SCHEMA_SQL};
pub use sqlite::SqliteIndex;
pub use traits::{Hit, IndexError, IndexResult, IndexStats, SearchIndex};

use crate::analysis::Stopwords;
use crate::config::{BackendKind, IndexConfig};
use std::path::Path;

/// Opens the backend selected by the configuration
///
/// # Arguments
///
/// * `config` - The index section of the configuration
/// * `stopwords` - Stopword set injected into the backend's normalizer
///
/// # Returns
///
/// * `Ok(Box<dyn SearchIndex>)` - Ready-to-use index
/// * `Err(IndexError)` - The database could not be opened or migrated
pub fn open_index(config: &IndexConfig, stopwords: Stopwords) -> IndexResult<Box<dyn SearchIndex>> {
    match config.backend {
        BackendKind::InMemory => {
            tracing::info!("Using in-memory index");
            Ok(Box::new(InMemoryIndex::new(stopwords)))
        }
        BackendKind::Persisted => {
            let path = config
                .database_path
                .as_deref()
                .ok_or(IndexError::MissingDatabasePath)?;
            tracing::info!("Using persisted index at {}", path);
            Ok(Box::new(SqliteIndex::new(Path::new(path), stopwords)?))
        }
    }
}

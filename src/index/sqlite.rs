//! SQLite index backend
//!
//! This module provides a SQLite-based implementation of the SearchIndex
//! trait over the canonical documents/terms/postings schema. The backend owns
//! a single connection, and every `add_document` runs in one transaction.

use crate::analysis::{Normalizer, Stopwords};
use crate::index::document::DocumentTerms;
use crate::index::ranker::{idf, rank, tf_idf};
use crate::index::schema::initialize_schema;
use crate::index::traits::{Hit, IndexResult, IndexStats, SearchIndex};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite index backend
pub struct SqliteIndex {
    conn: Connection,
    normalizer: Normalizer,
}

impl SqliteIndex {
    /// Opens or creates an index database
    ///
    /// An existing database keeps its documents: re-adding one of its URLs is
    /// a no-op.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    /// * `stopwords` - Stopword set for the normalizer
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteIndex)` - Successfully opened/created database
    /// * `Err(IndexError)` - Failed to open database or create the schema
    pub fn new(path: &Path, stopwords: Stopwords) -> IndexResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self {
            conn,
            normalizer: Normalizer::new(stopwords),
        })
    }

    /// Creates an index backed by a private in-memory database
    pub fn new_in_memory(stopwords: Stopwords) -> IndexResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self {
            conn,
            normalizer: Normalizer::new(stopwords),
        })
    }

    /// Number of surviving tokens recorded for `url`, if it was added
    pub fn document_length(&self, url: &str) -> IndexResult<Option<u64>> {
        let len: Option<i64> = self
            .conn
            .query_row(
                "SELECT doc_len FROM documents WHERE url = ?1",
                params![url],
                |row| row.get(0),
            )
            .optional()?;
        Ok(len.map(|l| l as u64))
    }

    /// Document frequency of an already-normalized stem
    pub fn document_frequency(&self, stem: &str) -> IndexResult<u64> {
        let df: Option<i64> = self
            .conn
            .query_row(
                "SELECT doc_freq FROM terms WHERE stem = ?1",
                params![stem],
                |row| row.get(0),
            )
            .optional()?;
        Ok(df.unwrap_or(0) as u64)
    }
}

impl SearchIndex for SqliteIndex {
    fn add_document(&mut self, url: &str, words: &[String]) -> IndexResult<()> {
        let tx = self.conn.transaction()?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT id FROM documents WHERE url = ?1",
                params![url],
                |row| row.get(0),
            )
            .optional()?;
        if existing.is_some() {
            tracing::debug!("Document already indexed: {}", url);
            return Ok(());
        }

        let doc_terms = DocumentTerms::collect(&self.normalizer, words);

        tx.execute(
            "INSERT INTO documents (url, doc_len) VALUES (?1, ?2)",
            params![url, doc_terms.length as i64],
        )?;
        let doc_id = tx.last_insert_rowid();

        {
            let mut upsert_term = tx.prepare_cached(
                "INSERT INTO terms (stem, doc_freq) VALUES (?1, 1)
                 ON CONFLICT(stem) DO UPDATE SET doc_freq = doc_freq + 1",
            )?;
            let mut select_term = tx.prepare_cached("SELECT id FROM terms WHERE stem = ?1")?;
            let mut insert_posting = tx.prepare_cached(
                "INSERT INTO postings (doc_id, term_id, count) VALUES (?1, ?2, ?3)",
            )?;

            for (stem, count) in &doc_terms.counts {
                upsert_term.execute(params![stem])?;
                let term_id: i64 = select_term.query_row(params![stem], |row| row.get(0))?;
                insert_posting.execute(params![doc_id, term_id, count])?;
            }
        }

        tx.commit()?;

        tracing::debug!(
            "Indexed {} ({} tokens, {} distinct terms)",
            url,
            doc_terms.length,
            doc_terms.distinct()
        );
        Ok(())
    }

    fn search(&self, term: &str) -> IndexResult<Vec<Hit>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let n = self.document_count()?;
        if n == 0 {
            return Ok(Vec::new());
        }
        let Some(stem) = self.normalizer.normalize(term) else {
            return Ok(Vec::new());
        };

        let record: Option<(i64, i64)> = self
            .conn
            .query_row(
                "SELECT id, doc_freq FROM terms WHERE stem = ?1",
                params![stem],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        let Some((term_id, doc_freq)) = record else {
            return Ok(Vec::new());
        };
        if doc_freq <= 0 {
            return Ok(Vec::new());
        }

        let weight = idf(n, doc_freq as u64);

        let mut stmt = self.conn.prepare_cached(
            "SELECT d.url, d.doc_len, p.count
             FROM postings p
             JOIN documents d ON d.id = p.doc_id
             WHERE p.term_id = ?1",
        )?;

        let rows = stmt
            .query_map(params![term_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut hits: Vec<Hit> = rows
            .into_iter()
            .filter(|&(_, doc_len, count)| doc_len > 0 && count > 0)
            .map(|(url, doc_len, count)| Hit {
                url,
                score: tf_idf(count as u64, doc_len as u64, weight),
            })
            .collect();

        rank(&mut hits);
        Ok(hits)
    }

    fn document_count(&self) -> IndexResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn stats(&self) -> IndexResult<IndexStats> {
        let count = |table: &str| -> IndexResult<u64> {
            let n: i64 = self.conn.query_row(
                &format!("SELECT COUNT(*) FROM {}", table),
                [],
                |row| row.get(0),
            )?;
            Ok(n as u64)
        };

        Ok(IndexStats {
            documents: count("documents")?,
            terms: count("terms")?,
            postings: count("postings")?,
        })
    }

    fn close(self: Box<Self>) -> IndexResult<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }
}

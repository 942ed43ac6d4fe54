//! Database schema definitions
//!
//! This module contains the canonical SQL schema for the persisted index.
//! The table and column names are fixed so other tools can read the file.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- One row per indexed URL; doc_len counts tokens surviving normalization
CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY,
    url TEXT UNIQUE NOT NULL,
    doc_len INTEGER NOT NULL DEFAULT 0
);

-- One row per stem; doc_freq counts documents containing it
CREATE TABLE IF NOT EXISTS terms (
    id INTEGER PRIMARY KEY,
    stem TEXT UNIQUE NOT NULL,
    doc_freq INTEGER NOT NULL DEFAULT 0
);

-- Occurrences of a term within a document
CREATE TABLE IF NOT EXISTS postings (
    doc_id INTEGER NOT NULL,
    term_id INTEGER NOT NULL,
    count INTEGER NOT NULL,
    PRIMARY KEY(doc_id, term_id),
    FOREIGN KEY(doc_id) REFERENCES documents(id),
    FOREIGN KEY(term_id) REFERENCES terms(id)
);

CREATE INDEX IF NOT EXISTS idx_postings_term ON postings(term_id);
"#;

/// Initializes the database schema
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Returns
///
/// * `Ok(())` - Schema initialized successfully
/// * `Err(rusqlite::Error)` - Failed to initialize schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

//! In-memory index backend
//!
//! Documents, terms and postings are held as three explicit tables, mirroring
//! the relational schema: postings are keyed by the composite
//! `(term id, document id)` so one term's postings form a contiguous range.
//!
//! The structures are not synchronized. Concurrent writers must be serialized
//! by the caller.

use crate::analysis::{Normalizer, Stopwords};
use crate::index::document::DocumentTerms;
use crate::index::ranker::{idf, rank, tf_idf};
use crate::index::traits::{Hit, IndexResult, IndexStats, SearchIndex};
use std::collections::{BTreeMap, HashMap};

type DocId = usize;
type TermId = usize;

#[derive(Debug, Clone)]
struct DocumentRecord {
    url: String,
    doc_len: u64,
}

#[derive(Debug, Clone, Copy)]
struct TermRecord {
    id: TermId,
    doc_freq: u64,
}

/// Volatile index backend
pub struct InMemoryIndex {
    normalizer: Normalizer,

    /// URL -> document id (uniqueness on URL)
    document_ids: HashMap<String, DocId>,

    /// Document id -> record; ids are dense and assigned in arrival order
    documents: Vec<DocumentRecord>,

    /// Stem -> term record (uniqueness on stem)
    terms: HashMap<String, TermRecord>,

    /// (term id, document id) -> occurrence count
    postings: BTreeMap<(TermId, DocId), u64>,
}

impl InMemoryIndex {
    /// Creates an empty index using the given stopword set
    pub fn new(stopwords: Stopwords) -> Self {
        Self {
            normalizer: Normalizer::new(stopwords),
            document_ids: HashMap::new(),
            documents: Vec::new(),
            terms: HashMap::new(),
            postings: BTreeMap::new(),
        }
    }

    /// Number of surviving tokens recorded for `url`, if it was added
    pub fn document_length(&self, url: &str) -> Option<u64> {
        self.document_ids
            .get(url)
            .map(|&id| self.documents[id].doc_len)
    }

    /// Document frequency of an already-normalized stem
    pub fn document_frequency(&self, stem: &str) -> u64 {
        self.terms.get(stem).map(|t| t.doc_freq).unwrap_or(0)
    }

    /// Occurrences of an already-normalized stem in `url`
    pub fn posting_count(&self, stem: &str, url: &str) -> u64 {
        match (self.terms.get(stem), self.document_ids.get(url)) {
            (Some(term), Some(&doc)) => self.postings.get(&(term.id, doc)).copied().unwrap_or(0),
            _ => 0,
        }
    }
}

impl Default for InMemoryIndex {
    fn default() -> Self {
        Self::new(Stopwords::default())
    }
}

impl SearchIndex for InMemoryIndex {
    fn add_document(&mut self, url: &str, words: &[String]) -> IndexResult<()> {
        if self.document_ids.contains_key(url) {
            tracing::debug!("Document already indexed: {}", url);
            return Ok(());
        }

        // Everything fallible happens before the first mutation
        let doc_terms = DocumentTerms::collect(&self.normalizer, words);

        let doc_id = self.documents.len();
        self.documents.push(DocumentRecord {
            url: url.to_string(),
            doc_len: doc_terms.length,
        });
        self.document_ids.insert(url.to_string(), doc_id);

        for (stem, count) in doc_terms.counts {
            let next_id = self.terms.len();
            let term = self.terms.entry(stem).or_insert(TermRecord {
                id: next_id,
                doc_freq: 0,
            });
            term.doc_freq += 1;
            self.postings.insert((term.id, doc_id), u64::from(count));
        }

        tracing::debug!(
            "Indexed {} ({} tokens, {} documents total)",
            url,
            doc_terms.length,
            self.documents.len()
        );
        Ok(())
    }

    fn search(&self, term: &str) -> IndexResult<Vec<Hit>> {
        let n = self.documents.len() as u64;
        if term.is_empty() || n == 0 {
            return Ok(Vec::new());
        }
        let Some(stem) = self.normalizer.normalize(term) else {
            return Ok(Vec::new());
        };
        let Some(record) = self.terms.get(&stem) else {
            return Ok(Vec::new());
        };
        if record.doc_freq == 0 {
            return Ok(Vec::new());
        }

        let weight = idf(n, record.doc_freq);
        let mut hits: Vec<Hit> = self
            .postings
            .range((record.id, DocId::MIN)..=(record.id, DocId::MAX))
            .filter_map(|(&(_, doc_id), &count)| {
                let doc = &self.documents[doc_id];
                if count == 0 || doc.doc_len == 0 {
                    return None;
                }
                Some(Hit {
                    url: doc.url.clone(),
                    score: tf_idf(count, doc.doc_len, weight),
                })
            })
            .collect();

        rank(&mut hits);
        Ok(hits)
    }

    fn document_count(&self) -> IndexResult<u64> {
        Ok(self.documents.len() as u64)
    }

    fn stats(&self) -> IndexResult<IndexStats> {
        Ok(IndexStats {
            documents: self.documents.len() as u64,
            terms: self.terms.len() as u64,
            postings: self.postings.len() as u64,
        })
    }

    fn close(self: Box<Self>) -> IndexResult<()> {
        Ok(())
    }
}

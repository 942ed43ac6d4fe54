//! Per-document term counting shared by every backend

use crate::analysis::Normalizer;
use std::collections::BTreeMap;

/// Normalized term statistics for one document, computed before any write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTerms {
    /// Stem -> occurrences in this document, in stem order
    pub counts: BTreeMap<String, u32>,

    /// Number of tokens that survived normalization
    pub length: u64,
}

impl DocumentTerms {
    /// Runs every raw word through the normalizer and counts the survivors
    pub fn collect<S: AsRef<str>>(normalizer: &Normalizer, words: &[S]) -> Self {
        let mut terms = Self::default();
        for word in words {
            if let Some(stem) = normalizer.normalize(word.as_ref()) {
                *terms.counts.entry(stem).or_insert(0) += 1;
                terms.length += 1;
            }
        }
        terms
    }

    /// Number of distinct terms in the document
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}

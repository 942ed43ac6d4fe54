//! TF-IDF scoring and deterministic hit ordering
//!
//! Both backends score through these functions with the same integer inputs,
//! so their floating-point results match bit for bit.

use crate::index::Hit;
use std::cmp::Ordering;

/// Inverse document frequency: `ln(N / df)`
pub fn idf(total_documents: u64, document_frequency: u64) -> f64 {
    (total_documents as f64 / document_frequency as f64).ln()
}

/// Score of one posting: `(count / doc_len) * idf`
pub fn tf_idf(count: u64, doc_len: u64, idf: f64) -> f64 {
    let tf = count as f64 / doc_len as f64;
    tf * idf
}

/// Orders hits by score descending, then URL ascending
///
/// Uses `f64::total_cmp`, so the order is total: two hits compare equal only
/// if they have the same URL and bit-identical scores.
pub fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.url.cmp(&b.url))
}

/// Sorts hits in place into result order
pub fn rank(hits: &mut [Hit]) {
    hits.sort_by(compare_hits);
}

//! JSON encoding of search results

use crate::index::Hit;

/// Encodes hits as a JSON array of `{"URL": ..., "Score": ...}` objects
///
/// Order is preserved. An empty slice encodes as `[]`, never `null`.
///
/// # Example
///
/// ```
/// use ripple_search::index::Hit;
/// use ripple_search::output::hits_to_json;
///
/// let hits = vec![Hit { url: "http://example.com/".to_string(), score: 0.5 }];
/// assert_eq!(
///     hits_to_json(&hits).unwrap(),
///     r#"[{"URL":"http://example.com/","Score":0.5}]"#
/// );
/// assert_eq!(hits_to_json(&[]).unwrap(), "[]");
/// ```
pub fn hits_to_json(hits: &[Hit]) -> Result<String, serde_json::Error> {
    serde_json::to_string(hits)
}

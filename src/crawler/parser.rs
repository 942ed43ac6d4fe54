//! HTML extractor for indexable text and outbound links
//!
//! This module walks a parsed HTML document once and collects:
//! - Text node content outside `<script>` and `<style>` subtrees
//! - Raw `href` values of `<a>` elements, in document order
//!
//! Words are produced lazily from the collected text as maximal runs of
//! Unicode letters and digits, lowercased.

use ego_tree::iter::Edge;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Node};

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"[\p{L}\p{N}]+").expect("valid regex");
}

/// Elements whose subtrees contribute neither words nor links
const SKIPPED_ELEMENTS: &[&str] = &["script", "style"];

/// Text and links extracted from one HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Visible text nodes, in document order
    texts: Vec<String>,

    /// Raw anchor hrefs, in document order (not resolved, not cleaned)
    hrefs: Vec<String>,
}

impl Extraction {
    /// Lowercase word/number tokens of the visible text, in order
    pub fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.texts.iter().flat_map(|text| {
            WORD_RE
                .find_iter(text)
                .map(|m| lowercase_alphanumeric(m.as_str()))
                .filter(|word| !word.is_empty())
        })
    }

    pub fn hrefs(&self) -> &[String] {
        &self.hrefs
    }

    /// True if the page yielded no text and no links
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.hrefs.is_empty()
    }

    /// Materializes both sequences: `(words, hrefs)`
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        let words = self.words().collect();
        (words, self.hrefs)
    }
}

/// Lowercases a token char by char, dropping anything that is not alphanumeric
///
/// Some lowercase mappings add combining marks (`İ` becomes `i` plus U+0307).
fn lowercase_alphanumeric(token: &str) -> String {
    token
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Extracts words and raw hrefs from an HTML payload
///
/// Bytes are decoded as UTF-8, replacing invalid sequences. The HTML parser
/// recovers from malformed markup, so the only degenerate input is an empty
/// payload, which yields an empty extraction rather than an error.
///
/// # Example
///
/// ```
/// use ripple_search::crawler::extract;
///
/// let html = br#"<p>Hello, world!</p><script>var x = 1</script><a href="a.html">A</a>"#;
/// let (words, hrefs) = extract(html).into_parts();
/// assert_eq!(words, vec!["hello", "world", "a"]);
/// assert_eq!(hrefs, vec!["a.html"]);
/// ```
pub fn extract(body: &[u8]) -> Extraction {
    if body.is_empty() {
        return Extraction::default();
    }

    let html = String::from_utf8_lossy(body);
    let document = Html::parse_document(&html);

    let mut extraction = Extraction::default();
    // Depth rather than a flag: script/style regions may nest or repeat
    let mut skip_depth = 0usize;

    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(element) => {
                    if is_skipped(element.name()) {
                        skip_depth += 1;
                    } else if skip_depth == 0 && element.name().eq_ignore_ascii_case("a") {
                        if let Some(href) = element.attr("href") {
                            extraction.hrefs.push(href.to_string());
                        }
                    }
                }
                Node::Text(text) if skip_depth == 0 => {
                    let content: &str = text;
                    extraction.texts.push(content.to_string());
                }
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(element) = node.value() {
                    if is_skipped(element.name()) {
                        skip_depth = skip_depth.saturating_sub(1);
                    }
                }
            }
        }
    }

    extraction
}

fn is_skipped(name: &str) -> bool {
    SKIPPED_ELEMENTS
        .iter()
        .any(|skipped| name.eq_ignore_ascii_case(skipped))
}

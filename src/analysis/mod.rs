//! Text analysis for indexing and querying
//!
//! Every raw token passes through the same pipeline before it reaches the
//! index or is looked up in it:
//! - lowercase
//! - drop if it is in the injected stopword set
//! - reduce to its English stem

mod normalizer;
mod stopwords;

pub use normalizer::Normalizer;
pub use stopwords::{Stopwords, DEFAULT_STOPWORDS};

use crate::analysis::Stopwords;
use rust_stemmers::{Algorithm, Stemmer};

/// Turns raw tokens into canonical index terms
///
/// The stopword set is injected at construction; there is no process-wide
/// default instance.
pub struct Normalizer {
    stopwords: Stopwords,
    stemmer: Stemmer,
}

impl Normalizer {
    /// Creates a normalizer with the given stopword set and the English stemmer
    pub fn new(stopwords: Stopwords) -> Self {
        Self {
            stopwords,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Returns the term for `raw`, or `None` if the token is dropped
    ///
    /// A token is dropped when it is empty after lowercasing, is a stopword,
    /// or stems to an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_search::{Normalizer, Stopwords};
    ///
    /// let normalizer = Normalizer::new(Stopwords::default());
    /// assert_eq!(normalizer.normalize("Running").as_deref(), Some("run"));
    /// assert_eq!(normalizer.normalize("the"), None);
    /// ```
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let lower = raw.to_lowercase();
        if lower.is_empty() || self.stopwords.contains(&lower) {
            return None;
        }

        let stem = self.stemmer.stem(&lower);
        if stem.is_empty() {
            return None;
        }
        Some(stem.into_owned())
    }

    /// True if the lowercased form of `word` is in the stopword set
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Stopwords::default())
    }
}

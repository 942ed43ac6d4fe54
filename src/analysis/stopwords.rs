use std::collections::HashSet;

/// Built-in English stopword list
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but",
    "to", "in", "of", "on", "for", "with", "as", "at", "by", "from",
    "is", "are", "was", "were", "be", "been", "being",
    "this", "that", "these", "those", "it", "its", "itself",
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
    "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "they", "them", "their", "theirs", "themselves",
    "do", "does", "did", "doing",
    "have", "has", "had", "having",
    "not", "no", "nor", "only", "very", "too",
    "can", "could", "should", "would", "may", "might", "must", "will",
    "if", "then", "else", "than", "so", "because", "while", "when", "where",
    "about", "above", "below", "under", "over", "into", "out", "up", "down",
    "again", "further", "once", "here", "there",
];

/// A case-sensitive set of lowercase stopwords
///
/// Lookups are exact; callers lowercase the token first. Entries are
/// lowercased and trimmed when the set is built, so a configured
/// "The" still filters "the".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Builds a set from arbitrary words, skipping blanks
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// An empty set: nothing is filtered
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOPWORDS)
    }
}

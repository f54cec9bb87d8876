//! Immutable stop-word set.

use crate::tokenizer;
use kwsearch_core::SearchError;
use std::collections::BTreeSet;

/// A validated, immutable-after-construction set of stop-words.
///
/// Stop-words are dropped before indexing and before query-term
/// interpretation. Membership lookup is `O(log n)`.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Build from a single space-separated string, e.g. `"in the a"`.
    pub fn from_str(text: &str) -> Result<Self, SearchError> {
        Self::from_iter(tokenizer::split(text).into_iter())
    }

    /// Build from any iterable of strings. Empty entries are discarded;
    /// every retained entry is validated.
    pub fn from_iter<I, S>(words: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for w in words {
            let w = w.as_ref();
            if w.is_empty() {
                continue;
            }
            tokenizer::validate(w)?;
            set.insert(w.to_string());
        }
        Ok(StopWords { words: set })
    }

    /// Whether `word` is a stop-word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop-words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set has no stop-words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

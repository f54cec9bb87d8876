//! Free-text query parser.

use crate::stopwords::StopWords;
use crate::tokenizer;
use kwsearch_core::SearchError;
use std::collections::BTreeSet;

/// A parsed query: disjoint(*) plus-word and minus-word sets, stop-words
/// already removed.
///
/// (*) disjoint unless the same raw word appeared both negated and
/// un-negated in the query text — see the crate's design notes on why that
/// ambiguity is left as emitted rather than resolved at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Words a matching document must contain.
    pub plus_words: BTreeSet<String>,
    /// Words a matching document must not contain.
    pub minus_words: BTreeSet<String>,
}

impl Query {
    /// True if the query has neither plus- nor minus-words (e.g. an
    /// all-stop-words query). Such a query matches nothing.
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

/// One parsed query token before it is sorted into `plus_words`/`minus_words`.
struct QueryWord {
    text: String,
    is_minus: bool,
}

fn parse_query_word(raw: &str) -> Result<QueryWord, SearchError> {
    if raw.is_empty() {
        return Err(SearchError::EmptyTerm);
    }
    let (is_minus, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    tokenizer::validate(rest)?;
    if rest.is_empty() || rest.starts_with('-') {
        return Err(SearchError::MalformedMinus(raw.to_string()));
    }
    Ok(QueryWord { text: rest.to_string(), is_minus })
}

/// Parse a free-text query into plus/minus word sets, dropping stop-words.
pub fn parse_query(text: &str, stop_words: &StopWords) -> Result<Query, SearchError> {
    let mut query = Query::default();
    for raw in tokenizer::split(text) {
        let word = parse_query_word(raw)?;
        if stop_words.contains(&word.text) {
            continue;
        }
        if word.is_minus {
            query.minus_words.insert(word.text);
        } else {
            query.plus_words.insert(word.text);
        }
    }
    Ok(query)
}

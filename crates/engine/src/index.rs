//! Inverted index for TF-IDF keyword search.
//!
//! Holds the forward posting lists (term → doc_id → tf), the inverse
//! postings (doc_id → term → tf), per-document metadata (rating, status,
//! own term set), and the ordered set of live doc-ids.
//!
//! # Term ownership
//!
//! Each document's words are interned once, at `add_document` time, as
//! `Arc<str>`. That same handle is cloned (a refcount bump, not a string
//! copy) into the forward index's key, the inverse index's key, and the
//! document's own term-set. The document owns its words; the index only
//! ever holds clones of the `Arc`. Dropping a document's term-set (on
//! `remove_document`) frees the backing allocation once the index's own
//! clones are also gone, never before.
//!
//! # Single-writer, multi-reader
//!
//! Mutation (`add_document`/`remove_document`) takes `&mut self`; queries
//! take `&self` and may run concurrently with each other, but never with a
//! mutation. This mirrors the engine's documented concurrency contract:
//! the caller, not the index, is responsible for serializing writers
//! against readers.

use crate::stopwords::StopWords;
use crate::tokenizer;
use kwsearch_core::{DocId, SearchError, Status};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

/// An interned query/index term.
pub type Term = Arc<str>;

/// Per-document metadata: rating, status, and the document's own term-set.
#[derive(Debug, Clone)]
pub struct DocumentMeta {
    /// Average of the document's rating vector (truncated toward zero).
    pub rating: i32,
    /// Moderation/lifecycle status.
    pub status: Status,
    /// The unique terms (after stop-word removal) the document contains.
    pub term_set: BTreeSet<Term>,
}

/// The inverted index.
#[derive(Debug, Default)]
pub struct SearchIndex {
    term_to_docs: BTreeMap<Term, BTreeMap<DocId, f64>>,
    doc_to_terms: BTreeMap<DocId, BTreeMap<Term, f64>>,
    metadata: HashMap<DocId, DocumentMeta>,
    doc_ids: BTreeSet<DocId>,
}

fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}

impl SearchIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        SearchIndex::default()
    }

    /// Add a document. Tokenizes and validates `text`, drops stop-words,
    /// computes term frequencies, and installs the document into all four
    /// index structures.
    pub fn add_document(
        &mut self,
        id: DocId,
        text: &str,
        status: Status,
        ratings: &[i32],
        stop_words: &StopWords,
    ) -> Result<(), SearchError> {
        if id < 0 {
            return Err(SearchError::NegativeId(id));
        }
        if self.metadata.contains_key(&id) {
            return Err(SearchError::DuplicateId(id));
        }

        let raw_tokens = tokenizer::split_and_validate(text)?;
        let words: Vec<&str> = raw_tokens
            .into_iter()
            .filter(|w| !stop_words.contains(w))
            .collect();

        let mut tf: HashMap<&str, f64> = HashMap::new();
        if !words.is_empty() {
            let inv = 1.0 / words.len() as f64;
            for &w in &words {
                *tf.entry(w).or_insert(0.0) += inv;
            }
        }

        let mut term_set = BTreeSet::new();
        let doc_terms = self.doc_to_terms.entry(id).or_default();
        for (word, freq) in tf {
            let term: Term = Arc::from(word);
            self.term_to_docs
                .entry(term.clone())
                .or_default()
                .insert(id, freq);
            doc_terms.insert(term.clone(), freq);
            term_set.insert(term);
        }

        let rating = compute_average_rating(ratings);
        self.metadata.insert(id, DocumentMeta { rating, status, term_set });
        self.doc_ids.insert(id);

        tracing::debug!(target: "kwsearch::index", doc_id = id, corpus_size = self.doc_ids.len(), "added document");
        Ok(())
    }

    /// Remove a document. Removing an id that is not live is a no-op.
    pub fn remove_document(&mut self, id: DocId) {
        let Some(terms) = self.doc_to_terms.remove(&id) else {
            return;
        };
        for term in terms.keys() {
            if let Some(postings) = self.term_to_docs.get_mut(term) {
                postings.remove(&id);
                if postings.is_empty() {
                    self.term_to_docs.remove(term);
                }
            }
        }
        self.metadata.remove(&id);
        self.doc_ids.remove(&id);
        tracing::debug!(target: "kwsearch::index", doc_id = id, corpus_size = self.doc_ids.len(), "removed document");
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.doc_ids.len()
    }

    /// Live doc-ids in ascending order.
    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.doc_ids.iter().copied()
    }

    /// Whether `id` is live.
    pub fn contains(&self, id: DocId) -> bool {
        self.metadata.contains_key(&id)
    }

    /// `doc_id -> tf` for `id`, or `None` if `id` is absent. Replaces the
    /// reference implementation's process-wide empty-map sentinel.
    pub fn word_frequencies(&self, id: DocId) -> Option<&BTreeMap<Term, f64>> {
        self.doc_to_terms.get(&id)
    }

    /// Posting list for `term`: `doc_id -> tf`, or `None` if the term is
    /// absent from the index.
    pub fn lookup(&self, term: &str) -> Option<&BTreeMap<DocId, f64>> {
        self.term_to_docs.get(term)
    }

    /// Number of live documents containing `term`.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.term_to_docs.get(term).map(BTreeMap::len).unwrap_or(0)
    }

    /// `ln(N / df(term))`. Caller must only invoke this for a term with a
    /// non-empty posting list (df > 0); the ranker enforces this.
    pub fn idf(&self, term: &str) -> f64 {
        let n = self.document_count() as f64;
        let df = self.doc_freq(term) as f64;
        (n / df).ln()
    }

    /// Document metadata, or `None` if `id` is absent.
    pub fn metadata(&self, id: DocId) -> Option<&DocumentMeta> {
        self.metadata.get(&id)
    }

    /// Parse `query` against this index and return the subset of its
    /// plus-words present in `id`'s term-set, plus the document's status.
    /// Returns an empty word list (but the status is still returned) if any
    /// minus-word is present. Fails if `id` is not live.
    pub fn match_document(
        &self,
        query: &crate::query::Query,
        id: DocId,
    ) -> Result<(Vec<String>, Status), SearchError> {
        let meta = self.metadata.get(&id).ok_or(SearchError::UnknownDocument(id))?;

        for minus in &query.minus_words {
            if meta.term_set.contains(minus.as_str()) {
                return Ok((Vec::new(), meta.status));
            }
        }

        let matched = query
            .plus_words
            .iter()
            .filter(|w| meta.term_set.contains(w.as_str()))
            .cloned()
            .collect();

        Ok((matched, meta.status))
    }
}

//! In-memory TF-IDF keyword search engine.
//!
//! [`SearchEngine`] is the public facade over [`kwsearch_engine::SearchIndex`]:
//! it owns the stop-word set and the index, and dispatches ranking to either
//! the sequential or the parallel implementation depending on the caller's
//! [`ExecutionHint`]. [`tracker`] and [`batch`] are the engine's two external
//! collaborators — a fixed-window query-rate tracker and a parallel batch
//! query driver — built on top of the facade rather than inside it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod tracker;

pub use kwsearch_core::{DocId, RankedDocument, SearchError, Status};
pub use kwsearch_engine::{Query, StopWords, Term};

use kwsearch_engine::SearchIndex;
use std::io;

/// Selects which ranker implementation a query uses. Both yield identical
/// results; the choice affects only throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionHint {
    /// Single-threaded ranking.
    #[default]
    Sequential,
    /// `rayon`-parallel ranking via a sharded accumulator.
    Parallel,
}

/// The public search engine: an index plus its stop-word set.
pub struct SearchEngine {
    index: SearchIndex,
    stop_words: StopWords,
}

impl SearchEngine {
    /// Build an engine from a space-separated stop-word string.
    pub fn new(stop_words: &str) -> Result<Self, SearchError> {
        Ok(SearchEngine { index: SearchIndex::new(), stop_words: StopWords::from_str(stop_words)? })
    }

    /// Build an engine from any iterable of stop-words.
    pub fn from_stop_words<I, S>(stop_words: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(SearchEngine { index: SearchIndex::new(), stop_words: StopWords::from_iter(stop_words)? })
    }

    /// Add a document. See [`kwsearch_engine::SearchIndex::add_document`].
    pub fn add_document(&mut self, id: DocId, text: &str, status: Status, ratings: &[i32]) -> Result<(), SearchError> {
        self.index.add_document(id, text, status, ratings, &self.stop_words)
    }

    /// Remove a document. A no-op if `id` is not live.
    pub fn remove_document(&mut self, id: DocId) {
        self.index.remove_document(id);
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Live doc-ids in ascending order.
    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.index.doc_ids()
    }

    /// Per-term frequencies for a live document, or `None` if `id` is absent.
    pub fn word_frequencies(&self, id: DocId) -> Option<std::collections::BTreeMap<Term, f64>> {
        self.index.word_frequencies(id).cloned()
    }

    /// Rank `query_text` against documents with `Status::Actual`, using `hint`.
    pub fn find_top_documents(&self, query_text: &str, hint: ExecutionHint) -> Result<Vec<RankedDocument>, SearchError> {
        self.find_top_documents_with_status(query_text, Status::Actual, hint)
    }

    /// Rank `query_text` against documents with the given `status`.
    pub fn find_top_documents_with_status(
        &self,
        query_text: &str,
        status: Status,
        hint: ExecutionHint,
    ) -> Result<Vec<RankedDocument>, SearchError> {
        self.find_top_documents_with_predicate(query_text, move |_, s, _| s == status, hint)
    }

    /// Rank `query_text`, keeping only documents for which `predicate(id,
    /// status, rating)` holds.
    pub fn find_top_documents_with_predicate<P>(
        &self,
        query_text: &str,
        predicate: P,
        hint: ExecutionHint,
    ) -> Result<Vec<RankedDocument>, SearchError>
    where
        P: Fn(DocId, Status, i32) -> bool + Sync,
    {
        let query = kwsearch_engine::parse_query(query_text, &self.stop_words)?;
        Ok(match hint {
            ExecutionHint::Sequential => kwsearch_engine::find_top_documents(&self.index, &query, predicate),
            ExecutionHint::Parallel => kwsearch_engine::find_top_documents_parallel(&self.index, &query, predicate),
        })
    }

    /// Parse `query_text` and return the plus-words of `id` it matches,
    /// together with `id`'s status. Fails if `id` is not live.
    pub fn match_document(&self, query_text: &str, id: DocId) -> Result<(Vec<String>, Status), SearchError> {
        let query = kwsearch_engine::parse_query(query_text, &self.stop_words)?;
        self.index.match_document(&query, id)
    }

    /// Remove duplicate documents (identical term-sets), writing a
    /// `Found duplicate document id <id>` line per removal to `sink`.
    pub fn remove_duplicates<W: io::Write>(&mut self, sink: &mut W) -> io::Result<Vec<DocId>> {
        kwsearch_engine::remove_duplicates(&mut self.index, sink)
    }

    /// [`Self::remove_duplicates`], writing to standard output.
    pub fn remove_duplicates_to_stdout(&mut self) -> io::Result<Vec<DocId>> {
        kwsearch_engine::remove_duplicates_to_stdout(&mut self.index)
    }
}

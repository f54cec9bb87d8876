//! Fixed-window query-rate tracker.
//!
//! An external collaborator, not part of [`crate::SearchEngine`] itself: it
//! wraps a `SearchEngine` reference and records, for a trailing window of
//! [`kwsearch_core::constants::TRACKER_WINDOW`] requests, how many returned
//! no results.

use crate::{DocId, ExecutionHint, RankedDocument, SearchEngine, SearchError, Status};
use kwsearch_core::constants::TRACKER_WINDOW;
use std::collections::VecDeque;

/// Tracks the empty-result rate over the last `TRACKER_WINDOW` queries run
/// through [`QueryRateTracker::add_find_request`].
pub struct QueryRateTracker<'a> {
    engine: &'a SearchEngine,
    was_empty: VecDeque<bool>,
    empty_count: usize,
}

impl<'a> QueryRateTracker<'a> {
    /// Wrap `engine`. The tracker borrows it for its lifetime; queries still
    /// go through the engine's own methods, not the tracker.
    pub fn new(engine: &'a SearchEngine) -> Self {
        QueryRateTracker { engine, was_empty: VecDeque::new(), empty_count: 0 }
    }

    fn record(&mut self, empty: bool) {
        self.was_empty.push_front(empty);
        if empty {
            self.empty_count += 1;
        }
        if self.was_empty.len() > TRACKER_WINDOW {
            if self.was_empty.pop_back() == Some(true) {
                self.empty_count -= 1;
            }
        }
    }

    /// Run `query_text` against `status` (default-filtered documents) and
    /// record whether it returned no results.
    pub fn add_find_request(
        &mut self,
        query_text: &str,
        status: Status,
        hint: ExecutionHint,
    ) -> Result<Vec<RankedDocument>, SearchError> {
        let results = self.engine.find_top_documents_with_status(query_text, status, hint)?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// Run `query_text` with an arbitrary predicate and record whether it
    /// returned no results.
    pub fn add_find_request_with_predicate<P>(
        &mut self,
        query_text: &str,
        predicate: P,
        hint: ExecutionHint,
    ) -> Result<Vec<RankedDocument>, SearchError>
    where
        P: Fn(DocId, Status, i32) -> bool + Sync,
    {
        let results = self.engine.find_top_documents_with_predicate(query_text, predicate, hint)?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// Number of requests in the current window that returned no results.
    pub fn no_result_requests(&self) -> usize {
        self.empty_count
    }
}

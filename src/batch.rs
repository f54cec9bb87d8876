//! Parallel batch query driver.
//!
//! An external collaborator over [`SearchEngine`]: it fans a batch of query
//! strings out across `rayon`'s thread pool, each query run through the
//! engine's sequential ranker (the parallelism here is across queries, not
//! within one), and gathers the results back in input order.

use crate::{RankedDocument, SearchEngine, SearchError, Status};
use rayon::prelude::*;

/// Rank every query in `queries` against `status`-filtered documents,
/// returning one result list per query, in input order.
pub fn process_queries(engine: &SearchEngine, queries: &[&str], status: Status) -> Vec<Result<Vec<RankedDocument>, SearchError>> {
    queries
        .par_iter()
        .map(|q| engine.find_top_documents_with_status(q, status, crate::ExecutionHint::Sequential))
        .collect()
}

/// As [`process_queries`], then flatten all successful result lists into one
/// list, preserving input order; the first error (if any) is returned
/// instead.
pub fn process_queries_joined(
    engine: &SearchEngine,
    queries: &[&str],
    status: Status,
) -> Result<Vec<RankedDocument>, SearchError> {
    let per_query = process_queries(engine, queries, status);
    let mut joined = Vec::new();
    for result in per_query {
        joined.extend(result?);
    }
    Ok(joined)
}

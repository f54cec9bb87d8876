//! Parallel TF-IDF ranker.
//!
//! Mirrors [`crate::rank::find_top_documents`] but spreads the per-plus-word
//! accumulation across a `rayon` thread pool, using a
//! [`ShardedAccumulator`](kwsearch_concurrency::ShardedAccumulator) in place
//! of the sequential ranker's plain `HashMap` so that concurrent writers to
//! the same document never race. Unlike the sequential ranker, minus-words
//! are checked per-hit against the document's own term-set rather than
//! pre-subtracted in a second pass, since there is no ordering guarantee
//! between a document's accumulation and a later removal once work is
//! spread across threads.

use crate::index::SearchIndex;
use crate::query::Query;
use crate::rank::relevance_then_rating;
use kwsearch_concurrency::ShardedAccumulator;
use kwsearch_core::{constants, DocId, RankedDocument, Status};
use rayon::prelude::*;

/// Parallel counterpart to [`crate::rank::find_top_documents`]. Produces the
/// same results (modulo floating-point summation order within
/// `RELEVANCE_EPSILON`), in the same sorted, truncated order.
pub fn find_top_documents_parallel<P>(index: &SearchIndex, query: &Query, predicate: P) -> Vec<RankedDocument>
where
    P: Fn(DocId, Status, i32) -> bool + Sync,
{
    let plus_words: Vec<&str> = query.plus_words.iter().map(String::as_str).collect();
    let minus_words: Vec<&str> = query.minus_words.iter().map(String::as_str).collect();
    let accumulator = ShardedAccumulator::with_default_shards();

    plus_words.par_iter().for_each(|&word| {
        let Some(postings) = index.lookup(word) else { return };
        if postings.is_empty() {
            return;
        }
        let idf = index.idf(word);
        for (&doc_id, &tf) in postings {
            let Some(meta) = index.metadata(doc_id) else { continue };
            let banned = minus_words.iter().any(|mw| meta.term_set.contains(*mw));
            if banned {
                continue;
            }
            if predicate(doc_id, meta.status, meta.rating) {
                accumulator.entry(doc_id).add(tf * idf);
            }
        }
    });

    let ordered = accumulator.build_ordered_map();
    let mut results: Vec<RankedDocument> = ordered
        .into_iter()
        .map(|(id, rel)| {
            let rating = index.metadata(id).map(|m| m.rating).unwrap_or(0);
            RankedDocument::new(id, rel, rating)
        })
        .collect();

    results.par_sort_by(relevance_then_rating);
    results.truncate(constants::MAX_RESULTS);
    results
}

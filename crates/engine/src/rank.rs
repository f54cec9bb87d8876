//! Sequential TF-IDF ranker.

use crate::index::SearchIndex;
use crate::query::Query;
use kwsearch_core::{constants, DocId, RankedDocument, Status};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Score `query` against `index`, keeping only documents for which
/// `predicate(id, status, rating)` holds, excluding any document hit by a
/// minus-word, and returning at most `MAX_RESULTS` hits sorted by
/// relevance descending, then rating descending on near-ties.
///
/// Relevance is accumulated into a `BTreeMap`, not a `HashMap`: the
/// subsequent sort is stable, so a genuine tie (equal relevance within
/// `RELEVANCE_EPSILON` *and* equal rating) falls back to whatever order the
/// pre-sort `Vec` was built in. Ascending doc-id order there matches the
/// parallel ranker's `ShardedAccumulator::build_ordered_map`, which is also
/// doc-id-ordered, so both rankers agree on genuine ties instead of the
/// sequential path depending on hash-seed-arbitrary order.
pub fn find_top_documents<P>(index: &SearchIndex, query: &Query, predicate: P) -> Vec<RankedDocument>
where
    P: Fn(DocId, Status, i32) -> bool,
{
    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();

    for word in &query.plus_words {
        let Some(postings) = index.lookup(word) else { continue };
        if postings.is_empty() {
            continue;
        }
        let idf = index.idf(word);
        for (&doc_id, &tf) in postings {
            let Some(meta) = index.metadata(doc_id) else { continue };
            if predicate(doc_id, meta.status, meta.rating) {
                *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
            }
        }
    }

    for word in &query.minus_words {
        if let Some(postings) = index.lookup(word) {
            for &doc_id in postings.keys() {
                relevance.remove(&doc_id);
            }
        }
    }

    if relevance.is_empty() {
        tracing::trace!(target: "kwsearch::rank", "query matched no documents");
    }

    let mut results: Vec<RankedDocument> = relevance
        .into_iter()
        .map(|(id, rel)| {
            let rating = index.metadata(id).map(|m| m.rating).unwrap_or(0);
            RankedDocument::new(id, rel, rating)
        })
        .collect();

    sort_and_truncate(&mut results);
    results
}

/// Total order used by both the sequential and parallel rankers: relevance
/// descending, falling back to rating descending when the two relevances
/// differ by less than `RELEVANCE_EPSILON`.
pub fn relevance_then_rating(a: &RankedDocument, b: &RankedDocument) -> Ordering {
    if (a.relevance - b.relevance).abs() < constants::RELEVANCE_EPSILON {
        b.rating.cmp(&a.rating)
    } else {
        b.relevance.partial_cmp(&a.relevance).unwrap_or(Ordering::Equal)
    }
}

/// Sort by `relevance_then_rating` and truncate to `MAX_RESULTS`.
pub fn sort_and_truncate(results: &mut Vec<RankedDocument>) {
    results.sort_by(relevance_then_rating);
    results.truncate(constants::MAX_RESULTS);
}

//! Ranked query result.

use crate::error::DocId;

/// A single scored hit returned by the ranker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedDocument {
    /// Document identifier.
    pub id: DocId,
    /// TF-IDF relevance score, summed over the query's plus-words.
    pub relevance: f64,
    /// The document's average rating, used as the tie-break key.
    pub rating: i32,
}

impl RankedDocument {
    /// Construct a new ranked result.
    pub fn new(id: DocId, relevance: f64, rating: i32) -> Self {
        RankedDocument { id, relevance, rating }
    }
}

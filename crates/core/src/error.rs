//! Error taxonomy for kwsearch.

use thiserror::Error;

/// Document identifier. Always non-negative for a live document.
pub type DocId = i64;

/// Errors surfaced by the index store and the query parser.
///
/// Queries themselves cannot fail against a valid index (an unknown term
/// simply matches nothing); only construction, mutation, and the id-addressed
/// lookups in this enum can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A token passed validation contained a control byte (< 0x20).
    #[error("token {0:?} contains a control character")]
    InvalidToken(String),

    /// `AddDocument` was called with a negative id.
    #[error("document id {0} is negative")]
    NegativeId(DocId),

    /// `AddDocument` was called with an id that is already live.
    #[error("document id {0} already exists")]
    DuplicateId(DocId),

    /// A query term was empty (the raw token was empty, or became empty
    /// after stripping a leading `-`... see `MalformedMinus` for the latter).
    #[error("query contains an empty term")]
    EmptyTerm,

    /// A query term was a bare `-` or began with `--`.
    #[error("malformed minus-word {0:?}")]
    MalformedMinus(String),

    /// `MatchDocument` was called with an id that is not live.
    #[error("document id {0} is not in the index")]
    UnknownDocument(DocId),
}

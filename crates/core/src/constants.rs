//! Named configuration constants.
//!
//! No environment variables or config files back these: the engine has no
//! external configuration surface, but the thresholds are still named
//! rather than inlined, matching the reference engine's own
//! `DOUBLE_COMPARISON_ERROR`-style constants.

/// Maximum number of results `find_top_documents` returns.
pub const MAX_RESULTS: usize = 5;

/// Absolute difference below which two relevance scores are considered tied,
/// falling back to rating as the tie-break.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Default ring-buffer capacity for the query-rate tracker (minutes in a day).
pub const TRACKER_WINDOW: usize = 1440;

/// Default shard count for the parallel ranker's relevance accumulator.
pub const ACCUMULATOR_SHARDS: usize = 100;

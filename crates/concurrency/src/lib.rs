//! Sharded concurrent accumulator used by the parallel ranker.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accumulator;

pub use accumulator::{AccumulatorEntry, ShardedAccumulator};

//! Sharded concurrent accumulator for per-document relevance scores.
//!
//! Generalized from the reference engine's `ConcurrentMap<Key, Value>`: a
//! fixed array of independently locked maps, indexed by `doc_id % shard_count`,
//! with a scope-guarded handle standing in for the original's
//! lock-guard-plus-reference `Access` struct.
//!
//! # Architectural rules
//!
//! - No shard blocks any other shard: acquiring a handle for doc A never
//!   contends with a handle for doc B unless A and B collide on the same shard.
//! - The accumulator is write-only during the fan-out phase and read-only
//!   during `build_ordered_map`; it is the caller's job not to interleave
//!   the two (see the module-level concurrency contract in the crate that
//!   drives this one).

use kwsearch_core::DocId;
use parking_lot::{Mutex, MutexGuard};
use std::collections::{BTreeMap, HashMap};

/// A scope-guarded handle to one entry's relevance accumulator.
///
/// Holds the shard's lock for its lifetime; the lock is released when the
/// handle is dropped. No other shard is affected by holding this handle.
pub struct AccumulatorEntry<'a> {
    guard: MutexGuard<'a, HashMap<DocId, f64>>,
    doc_id: DocId,
}

impl AccumulatorEntry<'_> {
    /// Add `delta` to this entry's value, default-constructing it to 0.0
    /// on first touch.
    pub fn add(&mut self, delta: f64) {
        *self.guard.entry(self.doc_id).or_insert(0.0) += delta;
    }
}

/// Fixed-shard-count concurrent accumulator mapping doc-id to relevance.
///
/// Each shard is an independently locked `HashMap`; the shard for a given
/// doc-id is `doc_id % shard_count`. Intended for a single fan-out phase
/// (many writers, one key namespace) followed by a single build-out
/// (`build_ordered_map`) that drains all shards into a deterministic,
/// doc-id-ordered map.
pub struct ShardedAccumulator {
    shards: Vec<Mutex<HashMap<DocId, f64>>>,
}

impl ShardedAccumulator {
    /// Create a new accumulator with `shard_count` independently locked shards.
    ///
    /// `shard_count` must be at least 1.
    pub fn new(shard_count: usize) -> Self {
        assert!(shard_count > 0, "ShardedAccumulator needs at least one shard");
        let shards = (0..shard_count).map(|_| Mutex::new(HashMap::new())).collect();
        ShardedAccumulator { shards }
    }

    /// Create a new accumulator using the default shard count
    /// (`kwsearch_core::constants::ACCUMULATOR_SHARDS`).
    pub fn with_default_shards() -> Self {
        Self::new(kwsearch_core::constants::ACCUMULATOR_SHARDS)
    }

    fn shard_index(&self, doc_id: DocId) -> usize {
        // doc_id is validated non-negative at index-insertion time, so the
        // i64 -> u64 reinterpretation below is exact.
        (doc_id as u64 as usize) % self.shards.len()
    }

    /// Obtain a scope-guarded handle to `doc_id`'s accumulator entry.
    ///
    /// Acquires only the lock for `doc_id`'s shard; other shards remain
    /// unblocked. The lock is released when the returned handle is dropped.
    pub fn entry(&self, doc_id: DocId) -> AccumulatorEntry<'_> {
        let idx = self.shard_index(doc_id);
        AccumulatorEntry {
            guard: self.shards[idx].lock(),
            doc_id,
        }
    }

    /// Number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Drain all shards into a single doc-id-ordered map.
    ///
    /// Acquires each shard's lock in turn. Must not be called concurrently
    /// with any in-flight `entry` handle from another thread — the caller
    /// is responsible for quiescing its worker pool first.
    pub fn build_ordered_map(&self) -> BTreeMap<DocId, f64> {
        let mut result = BTreeMap::new();
        for shard in &self.shards {
            let guard = shard.lock();
            result.extend(guard.iter().map(|(&k, &v)| (k, v)));
        }
        result
    }
}

impl Drop for ShardedAccumulator {
    fn drop(&mut self) {
        // Quiescence check: every shard's lock must be obtainable (i.e. not
        // held by some straggling handle) before we tear down storage.
        for shard in &self.shards {
            let _guard = shard.lock();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn single_shard_accumulates() {
        let acc = ShardedAccumulator::new(4);
        {
            let mut e = acc.entry(7);
            e.add(1.5);
        }
        {
            let mut e = acc.entry(7);
            e.add(2.5);
        }
        let map = acc.build_ordered_map();
        assert_eq!(map.get(&7), Some(&4.0));
    }

    #[test]
    fn different_docs_land_in_different_shards_when_possible() {
        let acc = ShardedAccumulator::new(8);
        assert_eq!(acc.shard_index(0), 0);
        assert_eq!(acc.shard_index(8), 0);
        assert_eq!(acc.shard_index(3), 3);
    }

    #[test]
    fn build_ordered_map_is_sorted_by_doc_id() {
        let acc = ShardedAccumulator::new(3);
        for id in [9, 1, 5, 2] {
            acc.entry(id).add(id as f64);
        }
        let keys: Vec<DocId> = acc.build_ordered_map().keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 5, 9]);
    }

    #[test]
    fn concurrent_writers_do_not_lose_updates() {
        let acc = Arc::new(ShardedAccumulator::new(ACCUMULATOR_TEST_SHARDS));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let acc = Arc::clone(&acc);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    acc.entry(42).add(1.0);
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        let map = acc.build_ordered_map();
        assert_eq!(map.get(&42), Some(&8000.0));
    }

    const ACCUMULATOR_TEST_SHARDS: usize = 16;

    proptest! {
        #[test]
        fn concurrent_adds_across_arbitrary_shard_counts_never_lose_an_update(
            shard_count in 1usize..32,
            items in prop::collection::vec((0i64..20, -50.0f64..50.0), 1..200),
            thread_count in 1usize..8,
        ) {
            let acc = Arc::new(ShardedAccumulator::new(shard_count));
            let mut expected: HashMap<DocId, f64> = HashMap::new();
            for &(id, delta) in &items {
                *expected.entry(id).or_insert(0.0) += delta;
            }

            let mut chunks: Vec<Vec<(DocId, f64)>> = vec![Vec::new(); thread_count];
            for (i, item) in items.into_iter().enumerate() {
                chunks[i % thread_count].push(item);
            }

            let handles: Vec<_> = chunks
                .into_iter()
                .map(|chunk| {
                    let acc = Arc::clone(&acc);
                    thread::spawn(move || {
                        for (id, delta) in chunk {
                            acc.entry(id).add(delta);
                        }
                    })
                })
                .collect();
            for h in handles {
                h.join().unwrap();
            }

            let actual = acc.build_ordered_map();
            prop_assert_eq!(actual.len(), expected.len());
            for (id, expected_val) in &expected {
                let actual_val = actual.get(id).copied().unwrap_or(0.0);
                prop_assert!(
                    (actual_val - expected_val).abs() < 1e-6,
                    "doc {id}: expected {expected_val}, got {actual_val}"
                );
            }
        }
    }
}

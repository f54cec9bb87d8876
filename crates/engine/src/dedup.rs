//! Duplicate-document detection and removal.
//!
//! Two documents are duplicates if they have the same set of distinct terms
//! after stop-word removal, irrespective of term frequency, rating, or
//! status. Ascending doc-id order makes the representative of a group of
//! duplicates is always its smallest member.

use crate::index::SearchIndex;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Remove duplicate documents from `index`, writing one
/// `Found duplicate document id <id>` line to `sink` per removal (in the
/// order duplicates are discovered, i.e. ascending doc-id). Returns the
/// removed ids in that same order.
pub fn remove_duplicates<W: Write>(index: &mut SearchIndex, sink: &mut W) -> io::Result<Vec<i64>> {
    let mut representative_of: BTreeMap<&std::collections::BTreeSet<crate::index::Term>, i64> = BTreeMap::new();
    let mut to_remove = Vec::new();

    // Term-sets are compared by value, but a `BTreeMap` keyed on a borrowed
    // term-set would tie that borrow to `index` for the whole pass while we
    // also need `&mut index` to remove documents afterward. Collect the
    // (doc_id, term_set) pairs once up front instead.
    let snapshot: Vec<(i64, std::collections::BTreeSet<crate::index::Term>)> = index
        .doc_ids()
        .map(|id| (id, index.metadata(id).expect("live id has metadata").term_set.clone()))
        .collect();

    for (id, term_set) in &snapshot {
        match representative_of.get(term_set) {
            None => {
                representative_of.insert(term_set, *id);
            }
            Some(&rep) => {
                let (keep, drop) = if rep < *id { (rep, *id) } else { (*id, rep) };
                if keep != rep {
                    representative_of.insert(term_set, keep);
                }
                to_remove.push(drop);
            }
        }
    }

    // `to_remove` is already ascending: the walk is ascending and a group's
    // representative is always set by the first (smallest) member seen.
    for id in &to_remove {
        index.remove_document(*id);
        writeln!(sink, "Found duplicate document id {id}")?;
        tracing::info!(target: "kwsearch::dedup", doc_id = id, "removed duplicate document");
    }

    Ok(to_remove)
}

/// Convenience wrapper over [`remove_duplicates`] that writes to standard
/// output, matching the reference tool's default behavior.
pub fn remove_duplicates_to_stdout(index: &mut SearchIndex) -> io::Result<Vec<i64>> {
    let mut stdout = io::stdout();
    remove_duplicates(index, &mut stdout)
}

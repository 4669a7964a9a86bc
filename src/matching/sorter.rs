//! Index-preserving dictionary sort
//!
//! Builds the sorted key image of a dictionary:
//! 1. Derive one key per entry (plain bytes or reversed bytes)
//! 2. Pair each key with its original index
//! 3. Insertion-sort the pairs by key
//!
//! Dictionaries here are command or prefix lists, a few dozen entries at
//! most, so the O(n²) insertion sort is fine and keeps the sort stable.

use super::types::*;
use crate::error::MatchResult;
use tracing::debug;

/// Sort a dictionary into a fresh key image
///
/// With [`KeyOrder::Reversed`] every key is the byte-reversed entry, which
/// groups entries sharing a suffix next to each other.
pub fn sort_dictionary<'d, S: AsRef<str>>(
    dictionary: &'d [S],
    order: KeyOrder,
) -> MatchResult<SortedDictionary<'d, S>> {
    let mut entries = Vec::new();
    entries.try_reserve_exact(dictionary.len())?;

    for (original, entry) in dictionary.iter().enumerate() {
        let bytes = entry.as_ref().as_bytes();
        let mut key = Vec::new();
        key.try_reserve_exact(bytes.len())?;
        match order {
            KeyOrder::Forward => key.extend_from_slice(bytes),
            KeyOrder::Reversed => key.extend(bytes.iter().rev()),
        }
        entries.push(SortedEntry {
            key: key.into_boxed_slice(),
            original,
        });
    }

    insertion_sort(&mut entries);
    debug!(entries = entries.len(), ?order, "sorted dictionary");

    Ok(SortedDictionary {
        dictionary,
        entries,
    })
}

/// Stable insertion sort by key
///
/// Entries only move past strictly greater keys, so equal keys keep
/// their relative order.
pub fn insertion_sort(entries: &mut [SortedEntry]) {
    for i in 1..entries.len() {
        let mut j = i;
        while j > 0 && entries[j - 1].key > entries[j].key {
            entries.swap(j - 1, j);
            j -= 1;
        }
    }
}

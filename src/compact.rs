//! Single-pass compaction of the parallel key and value sequences.
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::iter;

use super::positions::PositionSet;

/// Remove the entries at the `doomed` positions from `keys` and `values`,
/// then rebuild `index` over the survivors.
///
/// Positions at or beyond `keys.len()` are ignored.
/// Returns the number of entries that were removed.
///
/// The deletion boundaries are walked in ascending order with `keys.len()` appended as a sentinel,
/// and each block of survivors strictly between two boundaries is moved down to the write cursor.
/// Everything behind the cursor is a deleted entry once the walk is done, so truncating drops them.
pub(crate) fn compact<K, V, S>(
    keys: &mut Vec<K>,
    values: &mut Vec<V>,
    index: &mut HashMap<K, usize, S>,
    doomed: &PositionSet
) -> usize where K: Hash + Eq + Clone, S: BuildHasher {
    debug_assert_eq!(keys.len(), values.len());
    let len = keys.len();
    let mut boundaries = doomed.iter()
        .take_while(|&position| position < len)
        .chain(iter::once(len))
        .peekable();
    let mut write = match boundaries.peek() {
        Some(&first) if first < len => first,
        _ => return 0
    };
    let mut removed = 0;
    while let Some(current) = boundaries.next() {
        let next = match boundaries.peek() {
            Some(&next) => next,
            None => break // `current` is the sentinel
        };
        removed += 1;
        for survivor in (current + 1)..next {
            keys.swap(write, survivor);
            values.swap(write, survivor);
            write += 1;
        }
    }
    debug_assert_eq!(write, len - removed);
    keys.truncate(write);
    values.truncate(write);
    rebuild_index(keys, index);
    removed
}

/// Rebuild the position index from scratch, so that `index[keys[i]] == i`
pub(crate) fn rebuild_index<K, S>(keys: &[K], index: &mut HashMap<K, usize, S>)
    where K: Hash + Eq + Clone, S: BuildHasher {
    index.clear();
    for (position, key) in keys.iter().enumerate() {
        index.insert(key.clone(), position);
    }
}

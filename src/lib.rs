//! An insertion-ordered map backed by a pair of parallel `Vec`s.
//!
//! Keys and values live in two sequences in the order they were first inserted,
//! with a `HashMap` from each key to its current position.
//! This gives O(1) average lookup, O(1) append and O(1) positional access,
//! at the cost of O(n) deletion since the sequences have to be compacted.
//! Delete in batches whenever possible: the cost of compaction is paid once per call.
//!
//! ## Positions are not stable
//! The position of an entry is only valid until the next deletion.
//! Any deletion (`delete`, `delete_at`, `delete_positions` or `retain`) shifts the survivors down,
//! so positions obtained earlier must be queried again with [ArrayMap::position].
#[cfg(feature="serde")]
extern crate serde;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::iter::{self, FromIterator};
use std::ops::Index;
use std::fmt::{self, Debug, Formatter};
use std::{slice, vec};

mod compact;
pub mod positions;
#[cfg(feature="serde")]
mod serialization;

pub use positions::PositionSet;

/// A map that remembers insertion order and supports access by position.
///
/// Internally this is `{ keys: Vec<K>, values: Vec<V>, index: HashMap<K, usize> }`,
/// where `values[i]` belongs to `keys[i]` and `index[keys[i]] == i`.
/// Each key is stored twice (once in `keys` and once in the index), which is why keys must be `Clone`.
///
/// Overwriting an existing key keeps its original position.
/// Deletion preserves the relative order of the surviving entries,
/// but invalidates every position handed out before it.
#[derive(Clone)]
pub struct ArrayMap<K, V, S = RandomState> {
    keys: Vec<K>,
    values: Vec<V>,
    index: HashMap<K, usize, S>
}
impl<K: Hash + Eq + Clone, V> ArrayMap<K, V> {
    /// Create an empty `ArrayMap`
    #[inline]
    pub fn new() -> Self {
        ArrayMap {
            keys: Vec::new(),
            values: Vec::new(),
            index: HashMap::new()
        }
    }
    /// Create an empty `ArrayMap` with space for the specified number of entries
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayMap {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity)
        }
    }
    /// Create a map from parallel sequences of keys and values.
    ///
    /// Pairs are inserted in order with [ArrayMap::put].
    /// If the sequences differ in length, the unmatched tail of the longer one is ignored.
    /// ```
    /// # use arraymap::ArrayMap;
    /// let map = ArrayMap::from_pairs(vec!["a", "b", "c"], vec![1, 2]);
    /// assert_eq!(map.len(), 2);
    /// assert!(!map.contains_key("c"));
    /// ```
    #[inline]
    pub fn from_pairs<IK, IV>(keys: IK, values: IV) -> Self
        where IK: IntoIterator<Item=K>, IV: IntoIterator<Item=V> {
        let mut result = Self::new();
        result.put_all(keys, values);
        result
    }
}
impl<K, V, S> ArrayMap<K, V, S> where K: Hash + Eq + Clone, S: BuildHasher {
    /// Create an empty `ArrayMap` which will use the given hash builder for its index
    #[inline]
    pub fn with_hasher(hash_builder: S) -> Self {
        ArrayMap {
            keys: Vec::new(),
            values: Vec::new(),
            index: HashMap::with_hasher(hash_builder)
        }
    }
    /// Create an empty `ArrayMap` with space for the specified number of entries,
    /// using the given hash builder for its index
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        ArrayMap {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hash_builder)
        }
    }
    /// Whether the map has no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
    /// The number of distinct keys in the map
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }
    /// Put a key-value pair into the map, returning the previous value if the key was present.
    ///
    /// An existing key keeps its position and only has its value replaced,
    /// while a new key is appended to the end.
    #[inline]
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&position) = self.index.get(&key) {
            Some(std::mem::replace(&mut self.values[position], value))
        } else {
            let position = self.keys.len();
            self.index.insert(key.clone(), position);
            self.keys.push(key);
            self.values.push(value);
            debug_assert_eq!(self.keys.len(), self.values.len());
            debug_assert_eq!(self.keys.len(), self.index.len());
            None
        }
    }
    /// Put each aligned pair from `keys` and `values`,
    /// ignoring the unmatched tail of whichever sequence is longer.
    #[inline]
    pub fn put_all<IK, IV>(&mut self, keys: IK, values: IV)
        where IK: IntoIterator<Item=K>, IV: IntoIterator<Item=V> {
        self.extend(keys.into_iter().zip(values))
    }
    /// Put every entry of `other` into this map, in `other`'s order.
    ///
    /// Keys that are already present are overwritten but keep their current position.
    #[inline]
    pub fn merge<S2>(&mut self, other: ArrayMap<K, V, S2>) {
        let ArrayMap { keys, values, .. } = other;
        self.put_all(keys, values)
    }
    /// Get a reference to the value for the key.
    ///
    /// `None` means the key isn't present; a missing key is never an error.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V> where K: Borrow<Q>, Q: Hash + Eq + ?Sized {
        match self.index.get(key) {
            Some(&position) => Some(&self.values[position]),
            None => None
        }
    }
    /// Get a mutable reference to the value for the key, or `None` if the key isn't present.
    ///
    /// The key and its position are left alone.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V> where K: Borrow<Q>, Q: Hash + Eq + ?Sized {
        match self.index.get(key) {
            Some(&position) => Some(&mut self.values[position]),
            None => None
        }
    }
    /// Fetch a copy of the value for the key, or `V::default()` if the key is missing.
    ///
    /// Use [ArrayMap::get] when a missing key has to be told apart from a default value.
    #[inline]
    pub fn fetch<Q>(&self, key: &Q) -> V
        where K: Borrow<Q>, Q: Hash + Eq + ?Sized, V: Default + Clone {
        self.get(key).cloned().unwrap_or_default()
    }
    /// Check if the key is present
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool where K: Borrow<Q>, Q: Hash + Eq + ?Sized {
        self.index.contains_key(key)
    }
    /// The current position of the key.
    ///
    /// This is only valid until the next deletion.
    #[inline]
    pub fn position<Q>(&self, key: &Q) -> Option<usize> where K: Borrow<Q>, Q: Hash + Eq + ?Sized {
        self.index.get(key).cloned()
    }
    /// Get the key-value pair at the specified position.
    ///
    /// ## Panics
    /// If `index >= self.len()`
    /// ```
    /// # use arraymap::ArrayMap;
    /// let map = ArrayMap::from_pairs(vec!["a", "b"], vec![1, 2]);
    /// assert_eq!(map.get_at(1), (&"b", &2));
    /// ```
    #[inline]
    pub fn get_at(&self, index: usize) -> (&K, &V) {
        if index < self.keys.len() {
            (&self.keys[index], &self.values[index])
        } else {
            _index_out_of_bounds(index, self.keys.len())
        }
    }
    /// Get the key and a mutable reference to the value at the specified position.
    ///
    /// ## Panics
    /// If `index >= self.len()`
    #[inline]
    pub fn get_at_mut(&mut self, index: usize) -> (&K, &mut V) {
        if index < self.keys.len() {
            (&self.keys[index], &mut self.values[index])
        } else {
            _index_out_of_bounds(index, self.keys.len())
        }
    }
    /// Delete the entries with the specified keys, returning how many were actually removed.
    ///
    /// Keys that aren't present are ignored.
    /// All positions are invalidated.
    /// ```
    /// # use arraymap::ArrayMap;
    /// let mut map = ArrayMap::from_pairs(vec!["a", "b", "c", "d"], vec![1, 2, 3, 4]);
    /// assert_eq!(map.delete(&["a", "c", "z"]), 2);
    /// assert_eq!(map.keys(), &["b", "d"]);
    /// ```
    pub fn delete<'a, Q, I>(&mut self, keys: I) -> usize
        where I: IntoIterator<Item=&'a Q>, K: Borrow<Q>, Q: Hash + Eq + ?Sized + 'a {
        let mut doomed = PositionSet::with_capacity(self.len());
        for key in keys {
            if let Some(&position) = self.index.get(key) {
                doomed.insert(position);
            }
        }
        self.delete_positions(&doomed)
    }
    /// Delete the entries at the specified positions, returning how many were actually removed.
    ///
    /// Duplicate positions count once, the order they're given in doesn't matter,
    /// and positions that are out of bounds are ignored.
    /// All positions are invalidated.
    pub fn delete_at<I>(&mut self, positions: I) -> usize
        where I: IntoIterator, I::Item: Borrow<usize> {
        let len = self.len();
        let mut doomed = PositionSet::with_capacity(len);
        doomed.extend(positions.into_iter()
            .map(|position| *Borrow::<usize>::borrow(&position))
            .filter(|&position| position < len));
        self.delete_positions(&doomed)
    }
    /// Delete the entries at every position in the set, ignoring those that are out of bounds.
    ///
    /// The set itself can't hold `usize::max_value()`, see [PositionSet::insert].
    pub fn delete_positions(&mut self, positions: &PositionSet) -> usize {
        if positions.is_empty() {
            return 0;
        }
        let expected = positions.count_below(self.len());
        let removed = compact::compact(&mut self.keys, &mut self.values, &mut self.index, positions);
        debug_assert_eq!(removed, expected);
        self.debug_check_consistency();
        removed
    }
    /// Retains only the elements specified by the predicate, preserving their order.
    /// ```
    /// # use arraymap::ArrayMap;
    /// let mut map: ArrayMap<usize, usize> = (0..8).map(|x|(x, x*10)).collect();
    /// map.retain(|k, _| k % 2 == 0);
    /// assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![(0, 0), (2, 20), (4, 40), (6, 60)]);
    /// ```
    pub fn retain<F>(&mut self, mut func: F) where F: FnMut(&K, &mut V) -> bool {
        let mut doomed = PositionSet::with_capacity(self.len());
        for (position, (key, value)) in self.keys.iter().zip(self.values.iter_mut()).enumerate() {
            if !func(key, value) {
                doomed.insert(position);
            }
        }
        self.delete_positions(&doomed);
    }
    #[inline]
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
        self.index.clear();
    }
    /// Reserve space for the specified number of additional entries
    #[inline]
    pub fn reserve(&mut self, amount: usize) {
        self.keys.reserve(amount);
        self.values.reserve(amount);
        self.index.reserve(amount);
    }
    fn debug_check_consistency(&self) {
        debug_assert_eq!(self.keys.len(), self.values.len());
        debug_assert_eq!(self.keys.len(), self.index.len());
        if cfg!(debug_assertions) {
            for (position, key) in self.keys.iter().enumerate() {
                assert_eq!(self.index.get(key), Some(&position), "Corrupt index at {}", position);
            }
        }
    }
}
impl<K, V, S> ArrayMap<K, V, S> {
    /// The keys in order, as a read-only slice
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }
    /// The values in order, as a read-only slice
    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }
    /// The values in order, as a mutable slice.
    ///
    /// There is no mutable equivalent for keys.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [V] {
        &mut self.values
    }
    #[inline]
    pub fn iter(&self) -> Iter<K, V> {
        Iter(self.keys.iter().zip(self.values.iter()))
    }
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        IterMut(self.keys.iter().zip(self.values.iter_mut()))
    }
    /// Give a wrapper that will debug the underlying representation of this `ArrayMap`
    #[inline]
    pub fn raw_debug(&self) -> RawDebug<K, V, S> where K: Debug, V: Debug {
        RawDebug(self)
    }
}
/// A wrapper to debug the underlying representation of an `ArrayMap`
pub struct RawDebug<'a, K: 'a, V: 'a, S: 'a>(&'a ArrayMap<K, V, S>);
impl<'a, K: Debug, V: Debug, S> Debug for RawDebug<'a, K, V, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ArrayMap")
            .field("keys", &self.0.keys)
            .field("values", &self.0.values)
            .field("index", &self.0.index)
            .finish()
    }
}
/// Checks if two maps have the same entries in the same order.
impl<K, V1, V2, S1, S2> PartialEq<ArrayMap<K, V2, S2>> for ArrayMap<K, V1, S1>
    where K: PartialEq, V1: PartialEq<V2> {
    fn eq(&self, other: &ArrayMap<K, V2, S2>) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}
impl<K: Eq, V: Eq, S> Eq for ArrayMap<K, V, S> {}
/// Creates an `ArrayMap` from a list of key-value pairs, in order
///
/// ## Example
/// ````
/// #[macro_use] extern crate arraymap;
/// # fn main() {
/// let map = arraymap! {
///     "one" => 1,
///     "two" => 2
/// };
/// assert_eq!(map["one"], 1);
/// assert_eq!(map.get("three"), None);
/// // "one" was put first
/// assert_eq!(map.get_at(0), (&"one", &1));
/// # }
/// ````
#[macro_export]
macro_rules! arraymap {
    ($($key:expr => $value:expr),* $(,)*) => {
        {
            let entries = vec![$(($key, $value)),*];
            let mut result = $crate::ArrayMap::with_capacity(entries.len());
            result.extend(entries);
            result
        }
    };
}
impl<K, V, S: Default> Default for ArrayMap<K, V, S> {
    #[inline]
    fn default() -> Self {
        ArrayMap {
            keys: Vec::new(),
            values: Vec::new(),
            index: HashMap::default()
        }
    }
}
impl<'a, K, V, S, Q> Index<&'a Q> for ArrayMap<K, V, S>
    where K: Hash + Eq + Clone + Borrow<Q>, Q: Hash + Eq + ?Sized, S: BuildHasher {
    type Output = V;
    #[inline]
    fn index(&self, key: &'a Q) -> &V {
        if let Some(value) = self.get(key) {
            value
        } else {
            _missing_key()
        }
    }
}
impl<K: Debug, V: Debug, S> Debug for ArrayMap<K, V, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
impl<K, V, S> IntoIterator for ArrayMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.keys.into_iter().zip(self.values.into_iter()))
    }
}
impl<'a, K: 'a, V: 'a, S> IntoIterator for &'a ArrayMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, K: 'a, V: 'a, S> IntoIterator for &'a mut ArrayMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<K, V, S> Extend<(K, V)> for ArrayMap<K, V, S> where K: Hash + Eq + Clone, S: BuildHasher {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        if let Some(size) = iter.size_hint().1 {
            self.reserve(size);
        }
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}
impl<'a, K, V, S> Extend<(&'a K, &'a V)> for ArrayMap<K, V, S>
    where K: Hash + Eq + Clone + 'a, V: Clone + 'a, S: BuildHasher {
    #[inline]
    fn extend<I: IntoIterator<Item=(&'a K, &'a V)>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|(key, value)| (key.clone(), value.clone())))
    }
}
impl<K, V, S> FromIterator<(K, V)> for ArrayMap<K, V, S>
    where K: Hash + Eq + Clone, S: BuildHasher + Default {
    #[inline]
    fn from_iter<I>(iterable: I) -> Self where I: IntoIterator<Item=(K, V)> {
        let mut result = Self::default();
        result.extend(iterable);
        result
    }
}
impl<'a, K, V, S> FromIterator<(&'a K, &'a V)> for ArrayMap<K, V, S>
    where K: Hash + Eq + Clone + 'a, V: Clone + 'a, S: BuildHasher + Default {
    #[inline]
    fn from_iter<I>(iterable: I) -> Self where I: IntoIterator<Item=(&'a K, &'a V)> {
        let mut result = Self::default();
        result.extend(iterable);
        result
    }
}

macro_rules! delegating_iter {
    ($name:ident, [ $($lifetime:tt)* ], $target:ty, [ $item:ty ]) => {
        pub struct $name<$($lifetime,)* K, V>($target);
        impl<$($lifetime,)* K, V> Iterator for $name<$($lifetime,)* K, V> {
            type Item = $item;
            #[inline]
            fn next(&mut self) -> Option<$item> {
                self.0.next()
            }
            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.0.size_hint()
            }
        }
        impl<$($lifetime,)* K, V> DoubleEndedIterator for $name<$($lifetime,)* K, V> {
            #[inline]
            fn next_back(&mut self) -> Option<$item> {
                self.0.next_back()
            }
        }
        impl<$($lifetime,)* K, V> ExactSizeIterator for $name<$($lifetime,)* K, V> {}
        impl<$($lifetime,)* K, V> iter::FusedIterator for $name<$($lifetime,)* K, V> {}
    };
}
delegating_iter!(Iter, ['a], iter::Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>, [ (&'a K, &'a V) ]);
delegating_iter!(IterMut, ['a], iter::Zip<slice::Iter<'a, K>, slice::IterMut<'a, V>>, [ (&'a K, &'a mut V) ]);
delegating_iter!(IntoIter, [], iter::Zip<vec::IntoIter<K>, vec::IntoIter<V>>, [ (K, V) ]);

/// Support function that panics on an out-of-bounds position
#[cold] #[inline(never)]
fn _index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("Position out of bounds: the len is {} but the position is {}", len, index);
}
/// Support function that panics on a missing key
#[cold] #[inline(never)]
fn _missing_key() -> ! {
    panic!("Missing entry for key");
}

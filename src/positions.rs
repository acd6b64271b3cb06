//! Sets of positions, used to describe a batch deletion.
use std::iter;
use std::fmt::{self, Debug, Formatter};

use fixedbitset::{Ones, FixedBitSet};

/// A dense set of positions into an `ArrayMap`, backed by a bitset.
///
/// Duplicates collapse on insertion and iteration is always ascending,
/// which is exactly the shape the compaction pass wants.
/// Positions are not checked against any map here,
/// deletion simply ignores the ones that are out of range.
///
/// The bitset is sized by the largest position ever inserted,
/// so a set holding positions far past the end of a map costs the caller that allocation.
/// Prefer [ArrayMap::delete_at](crate::ArrayMap::delete_at) for untrusted positions,
/// which filters them against the map before building its set.
#[derive(Clone)]
pub struct PositionSet {
    handle: FixedBitSet,
    len: usize
}
impl PositionSet {
    #[inline]
    pub fn new() -> PositionSet {
        PositionSet::with_capacity(0)
    }
    /// Create a set that can hold positions below `bound` without growing.
    #[inline]
    pub fn with_capacity(bound: usize) -> PositionSet {
        PositionSet {
            handle: FixedBitSet::with_capacity(bound),
            len: 0
        }
    }
    /// Inserts the specified position into the set,
    /// returning `true` if it wasn't already present.
    ///
    /// ## Panics
    /// If `position == usize::max_value()`, since no bitset can hold it.
    #[inline]
    pub fn insert(&mut self, position: usize) -> bool {
        if position < self.handle.len() {
            let was_present = self.handle.put(position);
            self.len += !was_present as usize;
            !was_present
        } else {
            self.insert_fallback(position);
            true
        }
    }
    #[inline(never)] #[cold]
    fn insert_fallback(&mut self, position: usize) {
        assert!(position >= self.handle.len());
        let old_len = self.handle.len();
        let required = match position.checked_add(1) {
            Some(required) => required,
            None => _position_overflow(position)
        };
        self.handle.grow(required.max(old_len.saturating_mul(2)));
        debug_assert!(!self.handle.contains(position));
        self.handle.insert(position);
        self.len += 1
    }
    /// Remove the specified position if it is present,
    /// returning whether or not it was present.
    #[inline]
    pub fn remove(&mut self, position: usize) -> bool {
        if self.handle.contains(position) {
            self.handle.set(position, false);
            self.len -= 1;
            true
        } else {
            false
        }
    }
    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        self.handle.contains(position)
    }
    /// The smallest position in the set
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.handle.ones().next()
    }
    /// Iterate over the positions in ascending order
    #[inline]
    pub fn iter(&self) -> Iter {
        Iter {
            len: self.len,
            handle: self.handle.ones()
        }
    }
    #[inline]
    pub fn clear(&mut self) {
        self.handle.clear();
        self.len = 0;
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Count the positions that fall inside a map of the specified length
    #[inline]
    pub(crate) fn count_below(&self, bound: usize) -> usize {
        self.handle.count_ones(..bound.min(self.handle.len()))
    }
}
impl Default for PositionSet {
    #[inline]
    fn default() -> Self {
        PositionSet::new()
    }
}
impl PartialEq for PositionSet {
    fn eq(&self, other: &PositionSet) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl Eq for PositionSet {}
impl Debug for PositionSet {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
impl<'a> iter::Extend<&'a usize> for PositionSet {
    #[inline]
    fn extend<I: IntoIterator<Item=&'a usize>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned())
    }
}
impl iter::Extend<usize> for PositionSet {
    #[inline]
    fn extend<I: IntoIterator<Item=usize>>(&mut self, iter: I) {
        for position in iter.into_iter() {
            self.insert(position);
        }
    }
}
impl iter::FromIterator<usize> for PositionSet {
    #[inline]
    fn from_iter<I: IntoIterator<Item=usize>>(iter: I) -> Self {
        let mut result = PositionSet::new();
        result.extend(iter);
        result
    }
}
impl<'a> iter::FromIterator<&'a usize> for PositionSet {
    #[inline]
    fn from_iter<I: IntoIterator<Item=&'a usize>>(iter: I) -> Self {
        let mut result = PositionSet::new();
        result.extend(iter);
        result
    }
}
impl<'a> IntoIterator for &'a PositionSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An ascending iterator over the positions of a [PositionSet]
pub struct Iter<'a> {
    len: usize,
    handle: Ones<'a>
}
impl<'a> Iterator for Iter<'a> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.handle.next() {
            Some(position) => {
                self.len -= 1;
                Some(position)
            },
            None => {
                debug_assert_eq!(self.len, 0);
                None
            }
        }
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
    #[inline]
    fn count(self) -> usize where Self: Sized {
        self.len
    }
}
impl<'a> iter::ExactSizeIterator for Iter<'a> {}
impl<'a> iter::FusedIterator for Iter<'a> {}

/// Support function that panics on a position no bitset can hold
#[cold] #[inline(never)]
fn _position_overflow(position: usize) -> ! {
    panic!("Position overflowed a PositionSet: {}", position);
}

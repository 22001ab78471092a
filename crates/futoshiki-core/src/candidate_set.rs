//! Candidate values for a single cell.
//!
//! This module provides [`CandidateSet`], a compact bitset of the values
//! `1..=N` that are still possible for a cell.
//!
//! # Examples
//!
//! ```
//! use futoshiki_core::CandidateSet;
//!
//! let mut candidates = CandidateSet::full(5);
//! candidates.remove(2);
//! candidates.remove(4);
//!
//! assert_eq!(candidates.len(), 3);
//! assert_eq!(candidates.min(), Some(1));
//! assert_eq!(candidates.max(), Some(5));
//! assert_eq!(candidates.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
//! ```

use std::{
    fmt::{self, Debug, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign},
};

/// A set of candidate values for a single cell.
///
/// Values range from `1` to [`CandidateSet::MAX_VALUE`]. Internally bit
/// `v - 1` represents value `v`, so set operations are single integer
/// operations.
///
/// # Set Operations
///
/// ```
/// use futoshiki_core::CandidateSet;
///
/// let a = CandidateSet::from_iter([1, 2, 3]);
/// let b = CandidateSet::from_iter([2, 3, 4]);
///
/// assert_eq!(a | b, CandidateSet::from_iter([1, 2, 3, 4]));
/// assert_eq!(a & b, CandidateSet::from_iter([2, 3]));
/// assert_eq!(a - b, CandidateSet::from_elem(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CandidateSet {
    bits: u16,
}

impl CandidateSet {
    /// The largest value a candidate set can hold.
    pub const MAX_VALUE: u8 = 16;

    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates the set `{1..=dimension}`.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is not in the range `1..=MAX_VALUE`.
    #[must_use]
    pub fn full(dimension: u8) -> Self {
        assert!(
            (1..=Self::MAX_VALUE).contains(&dimension),
            "Dimension must be between 1 and {}, got {dimension}",
            Self::MAX_VALUE
        );
        Self::below(dimension + 1)
    }

    /// Creates a set containing a single value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range `1..=MAX_VALUE`.
    #[must_use]
    pub fn from_elem(value: u8) -> Self {
        Self {
            bits: Self::bit(value),
        }
    }

    /// Returns the set of all values strictly less than `bound`.
    ///
    /// `below(1)` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is greater than `MAX_VALUE + 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use futoshiki_core::CandidateSet;
    ///
    /// assert_eq!(CandidateSet::below(4), CandidateSet::from_iter([1, 2, 3]));
    /// assert!(CandidateSet::below(1).is_empty());
    /// ```
    #[must_use]
    pub fn below(bound: u8) -> Self {
        assert!(
            bound <= Self::MAX_VALUE + 1,
            "Bound must be at most {}, got {bound}",
            Self::MAX_VALUE + 1
        );
        #[expect(clippy::cast_possible_truncation)]
        let bits = ((1_u32 << bound.saturating_sub(1)) - 1) as u16;
        Self { bits }
    }

    /// Returns the set of all values strictly greater than `bound`, up to
    /// [`MAX_VALUE`](Self::MAX_VALUE).
    ///
    /// # Examples
    ///
    /// ```
    /// use futoshiki_core::CandidateSet;
    ///
    /// let above = CandidateSet::above(2) & CandidateSet::full(5);
    /// assert_eq!(above, CandidateSet::from_iter([3, 4, 5]));
    /// assert!(CandidateSet::above(CandidateSet::MAX_VALUE).is_empty());
    /// ```
    #[must_use]
    pub fn above(bound: u8) -> Self {
        let bound = bound.min(Self::MAX_VALUE);
        #[expect(clippy::cast_possible_truncation)]
        let bits = (!((1_u32 << bound) - 1) & u32::from(u16::MAX)) as u16;
        Self { bits }
    }

    #[track_caller]
    fn bit(value: u8) -> u16 {
        assert!(
            (1..=Self::MAX_VALUE).contains(&value),
            "Value must be between 1 and {}, got {value}",
            Self::MAX_VALUE
        );
        1 << (value - 1)
    }

    /// Adds a value to the set.
    ///
    /// Returns `true` if the value was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range `1..=MAX_VALUE`.
    pub fn insert(&mut self, value: u8) -> bool {
        let bit = Self::bit(value);
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes a value from the set.
    ///
    /// Returns `true` if the value was present.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range `1..=MAX_VALUE`.
    pub fn remove(&mut self, value: u8) -> bool {
        let bit = Self::bit(value);
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns `true` if the set contains the value.
    ///
    /// Values outside `1..=MAX_VALUE` are never contained.
    #[must_use]
    pub fn contains(self, value: u8) -> bool {
        (1..=Self::MAX_VALUE).contains(&value) && self.bits & (1 << (value - 1)) != 0
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the smallest value, or `None` if the set is empty.
    #[must_use]
    pub fn min(self) -> Option<u8> {
        self.iter().next()
    }

    /// Returns the largest value, or `None` if the set is empty.
    #[must_use]
    pub fn max(self) -> Option<u8> {
        self.iter().next_back()
    }

    /// Returns the value if the set has exactly one element.
    #[must_use]
    pub fn as_single(self) -> Option<u8> {
        if self.len() == 1 { self.min() } else { None }
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the values in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns `true` if every value of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns an iterator over the values in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl BitOr for CandidateSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for CandidateSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for CandidateSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for CandidateSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl Sub for CandidateSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl SubAssign for CandidateSet {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.difference(rhs);
    }
}

impl FromIterator<u8> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<u8> for CandidateSet {
    fn extend<T: IntoIterator<Item = u8>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl Debug for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

/// Iterator over the values of a [`CandidateSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = (15 - self.bits.leading_zeros()) as u8;
        self.bits &= !(1 << index);
        Some(index + 1)
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_full() {
        let set = CandidateSet::full(5);
        assert_eq!(set.len(), 5);
        for value in 1..=5 {
            assert!(set.contains(value));
        }
        assert!(!set.contains(6));
        assert_eq!(CandidateSet::full(16).len(), 16);
    }

    #[test]
    #[should_panic(expected = "Dimension must be")]
    fn test_full_rejects_zero() {
        let _ = CandidateSet::full(0);
    }

    #[test]
    #[should_panic(expected = "Value must be")]
    fn test_rejects_zero() {
        let mut set = CandidateSet::new();
        set.insert(0);
    }

    #[test]
    #[should_panic(expected = "Value must be")]
    fn test_rejects_seventeen() {
        let _ = CandidateSet::from_elem(17);
    }

    #[test]
    fn test_insert_remove_result() {
        let mut set = CandidateSet::new();
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max() {
        let set = CandidateSet::from_iter([2, 3, 4]);
        assert_eq!(set.min(), Some(2));
        assert_eq!(set.max(), Some(4));
        assert_eq!(CandidateSet::EMPTY.min(), None);
        assert_eq!(CandidateSet::EMPTY.max(), None);
        assert_eq!(CandidateSet::from_elem(16).max(), Some(16));
    }

    #[test]
    fn test_as_single() {
        let mut set = CandidateSet::new();
        assert_eq!(set.as_single(), None);
        set.insert(4);
        assert_eq!(set.as_single(), Some(4));
        set.insert(1);
        assert_eq!(set.as_single(), None);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(CandidateSet::below(3), CandidateSet::from_iter([1, 2]));
        assert_eq!(CandidateSet::below(17), CandidateSet::full(16));
        assert!(CandidateSet::below(1).is_empty());
        assert_eq!(
            CandidateSet::above(3) & CandidateSet::full(5),
            CandidateSet::from_iter([4, 5])
        );
        assert_eq!(CandidateSet::above(0), CandidateSet::full(16));
    }

    #[test]
    fn test_iteration_order() {
        let set = CandidateSet::from_iter([5, 1, 3]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(set.iter().rev().collect::<Vec<_>>(), vec![5, 3, 1]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_debug_format() {
        let set = CandidateSet::from_iter([1, 3, 4, 5]);
        assert_eq!(format!("{set:?}"), "{1, 3, 4, 5}");
        assert_eq!(CandidateSet::EMPTY.to_string(), "{}");
    }

    #[test]
    fn test_subset() {
        let a = CandidateSet::from_iter([1, 2]);
        let b = CandidateSet::from_iter([1, 2, 3]);
        assert!(a.is_subset(b));
        assert!(!b.is_subset(a));
        assert!(CandidateSet::EMPTY.is_subset(a));
    }

    proptest! {
        #[test]
        fn prop_below_and_above_partition(bound in 1_u8..=16) {
            let below = CandidateSet::below(bound);
            let above = CandidateSet::above(bound);
            prop_assert!((below & above).is_empty());
            prop_assert_eq!(below | above | CandidateSet::from_elem(bound), CandidateSet::full(16));
        }

        #[test]
        fn prop_iter_matches_contains(values in proptest::collection::vec(1_u8..=16, 0..16)) {
            let set = CandidateSet::from_iter(values.iter().copied());
            for value in 1..=16 {
                prop_assert_eq!(set.contains(value), values.contains(&value));
            }
            prop_assert_eq!(set.iter().count(), set.len());
        }
    }
}

//! Sets of slots.
//!
//! A `SquareSet` is a 128-bit mask where bit `i` stands for slot `i`. Only the
//! low 70 bits are ever set, so the board and the off-board slots fit in one
//! value that is cheap to copy and combine.

use crate::Square;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// A set of slots (board squares and off-board slots).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u128);

impl SquareSet {
    /// No slots.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// All 70 slots.
    pub const ALL: SquareSet = SquareSet((1u128 << Square::COUNT) - 1);

    /// The 64 board squares.
    pub const BOARD: SquareSet = SquareSet(u64::MAX as u128);

    /// Creates a set from a raw mask. Bits above slot 69 are dropped.
    #[inline]
    pub const fn from_bits(bits: u128) -> Self {
        SquareSet(bits & Self::ALL.0)
    }

    /// Returns the raw mask.
    #[inline]
    pub const fn bits(self) -> u128 {
        self.0
    }

    /// Creates a set containing only the given slot.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1u128 << sq.index())
    }

    /// Returns true if the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of slots in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the given slot is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u128 << sq.index())) != 0
    }

    /// Adds the given slot.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u128 << sq.index();
    }

    /// Removes the given slot.
    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !(1u128 << sq.index());
    }

    /// Pops and returns the lowest slot.
    #[inline]
    pub fn pop_first(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let index = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Square::from_index(index)
        }
    }

    /// Returns an iterator over the slots in ascending order.
    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self)
    }
}

impl BitAnd for SquareSet {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for SquareSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        SquareSet(!self.0 & Self::ALL.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the slots in a set.
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.len();
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SquareSetIter(self)
    }
}

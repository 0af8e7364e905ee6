//! Move representation.

use crate::Square;
use std::fmt;

/// A move from one slot to another.
///
/// Off-board slots take part in moves too: a move *to* the deposit powers a
/// piece up in place, a move *from* a nest lays an egg, and a move from a
/// depot plants a Miner.
///
/// Encoded compactly: 7 bits from, 7 bits to.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move((from.index() as u16) | ((to.index() as u16) << 7))
    }

    /// Returns the source slot.
    #[inline]
    pub const fn from(self) -> Square {
        match Square::from_index((self.0 & 0x7F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the destination slot.
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_index(((self.0 >> 7) & 0x7F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns true if the move starts or ends on the given slot.
    #[inline]
    pub fn touches(self, sq: Square) -> bool {
        self.from() == sq || self.to() == sq
    }

    /// Returns true if both slots are board squares and the move advances two
    /// rows along one column.
    pub fn is_double_step(self) -> bool {
        let (from, to) = (self.from(), self.to());
        from.is_board()
            && to.is_board()
            && from.col() == to.col()
            && (from.row() - to.row()).abs() == 2
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}->{})", self.from(), self.to())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())
    }
}

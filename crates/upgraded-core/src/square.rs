//! Square representation.

use crate::Color;
use std::fmt;

/// One of the 70 slots a piece can occupy.
///
/// Slots 0-63 are the 8x8 board in row-major order (`index = col + row * 8`),
/// with row 0 at Black's side. The remaining slots sit beside the board:
///
/// | index | slot |
/// |-------|------|
/// | 64/65 | White/Black Miner depot |
/// | 66/67 | White/Black power deposit |
/// | 68/69 | White/Black Dodo nest |
///
/// Board squares also have algebraic names: file `a`-`h` is the column and
/// the rank is `8 - row`, so index 0 is a8 and index 60 is e1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of slots, board and off-board.
    pub const COUNT: usize = 70;

    /// Number of board squares.
    pub const BOARD_COUNT: usize = 64;

    pub const WHITE_DEPOT: Square = Square(64);
    pub const BLACK_DEPOT: Square = Square(65);
    pub const WHITE_DEPOSIT: Square = Square(66);
    pub const BLACK_DEPOSIT: Square = Square(67);
    pub const WHITE_NEST: Square = Square(68);
    pub const BLACK_NEST: Square = Square(69);

    /// Creates a square from index (0-69).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a board square from column and row, or `None` if off the board.
    #[inline]
    pub const fn from_coords(col: i8, row: i8) -> Option<Self> {
        if col >= 0 && col < 8 && row >= 0 && row < 8 {
            Some(Square((col + row * 8) as u8))
        } else {
            None
        }
    }

    /// Parses a board square from algebraic notation (e.g., "e2").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Self::from_coords((file - b'a') as i8, (b'8' - rank) as i8)
    }

    /// Returns the Miner depot of the given color.
    #[inline]
    pub const fn depot(color: Color) -> Self {
        Square(64 + color as u8)
    }

    /// Returns the power deposit of the given color.
    #[inline]
    pub const fn deposit(color: Color) -> Self {
        Square(66 + color as u8)
    }

    /// Returns the Dodo nest of the given color.
    #[inline]
    pub const fn nest(color: Color) -> Self {
        Square(68 + color as u8)
    }

    /// Returns the square in front of the given color's King start square
    /// that the unmoved King may step onto when a non-egg Pawn stands there.
    #[inline]
    pub const fn king_swap(color: Color) -> Self {
        match color {
            Color::White => Square(52),
            Color::Black => Square(12),
        }
    }

    /// Returns the index (0-69).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the index as a `usize`, for slot lookups.
    #[inline]
    pub const fn slot(self) -> usize {
        self.0 as usize
    }

    /// Returns true for squares 0-63.
    #[inline]
    pub const fn is_board(self) -> bool {
        (self.0 as usize) < Self::BOARD_COUNT
    }

    /// Returns the column (0-7). Only meaningful for board squares.
    #[inline]
    pub const fn col(self) -> i8 {
        (self.0 % 8) as i8
    }

    /// Returns the row (0-7). Only meaningful for board squares.
    #[inline]
    pub const fn row(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// Returns the board square displaced by the given column and row deltas.
    #[inline]
    pub const fn offset(self, dcol: i8, drow: i8) -> Option<Self> {
        if !self.is_board() {
            return None;
        }
        Self::from_coords(self.col() + dcol, self.row() + drow)
    }

    /// Iterates over the 64 board squares.
    pub fn board() -> impl Iterator<Item = Square> {
        (0..Self::BOARD_COUNT as u8).map(Square)
    }

    /// Iterates over all 70 slots.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    /// Returns the algebraic name of a board square, or the slot name of an
    /// off-board square.
    pub fn to_algebraic(self) -> String {
        match self.0 {
            0..=63 => format!(
                "{}{}",
                (b'a' + self.col() as u8) as char,
                (b'8' - self.row() as u8) as char
            ),
            64 => "white-depot".to_string(),
            65 => "black-depot".to_string(),
            66 => "white-deposit".to_string(),
            67 => "black-deposit".to_string(),
            68 => "white-nest".to_string(),
            _ => "black-nest".to_string(),
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

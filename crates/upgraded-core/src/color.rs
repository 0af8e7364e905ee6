//! Player color representation.

/// Represents the two players.
///
/// White sits at the bottom of the board (rows 6 and 7) and advances toward
/// row 0; Black sits at the top and advances toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row delta of a forward pawn step (-1 for White, +1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the row holding this color's King and Rooks at the start.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Returns the row this color's pawns start on. Eggs are laid here too.
    #[inline]
    pub const fn pawn_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Returns the row a pawn of this color must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_row(self) -> i8 {
        match self {
            Color::White => 3,
            Color::Black => 4,
        }
    }

    /// Returns the row on which a pawn of this color promotes.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        self.opposite().back_row()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

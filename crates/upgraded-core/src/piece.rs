//! Piece representation.

use crate::Color;
use std::fmt;

/// The kinds of piece that can occupy a slot. `None` marks an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    None = 0,
    Pawn = 1,
    Rook = 2,
    Knight = 3,
    Bishop = 4,
    Queen = 5,
    King = 6,
    Miner = 7,
    TemporaryQueen = 8,
    Dodo = 9,
}

impl PieceKind {
    /// Returns the index of this kind (0-9).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the material value of an un-powered piece of this kind.
    pub const fn base_value(self) -> f64 {
        match self {
            PieceKind::Pawn => 1.0,
            PieceKind::Knight | PieceKind::Bishop => 3.0,
            PieceKind::Rook => 5.0,
            PieceKind::Queen => 9.0,
            PieceKind::King => 10.0,
            PieceKind::Miner => 2.0,
            PieceKind::Dodo => 4.0,
            PieceKind::None | PieceKind::TemporaryQueen => 0.0,
        }
    }

    /// Returns the diagram character for this kind with the given color.
    pub const fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::None => return '.',
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Miner => 'm',
            PieceKind::TemporaryQueen => 't',
            PieceKind::Dodo => 'd',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::None => "None",
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
            PieceKind::Miner => "Miner",
            PieceKind::TemporaryQueen => "Temporary Queen",
            PieceKind::Dodo => "Dodo",
        };
        write!(f, "{}", name)
    }
}

/// The contents of one board slot.
///
/// Pieces are plain values: moving a piece copies it, and an empty slot holds
/// [`Piece::NONE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
    pub powered_up: bool,
    pub is_egg: bool,
}

impl Piece {
    /// The empty slot.
    pub const NONE: Piece = Piece {
        color: Color::White,
        kind: PieceKind::None,
        has_moved: true,
        powered_up: false,
        is_egg: false,
    };

    /// Creates an unmoved, un-powered piece.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            has_moved: false,
            powered_up: false,
            is_egg: false,
        }
    }

    /// Creates an egg: a pawn laid by a Dodo, inheriting the Dodo's power state.
    #[inline]
    pub const fn egg(color: Color, powered_up: bool) -> Self {
        Piece {
            color,
            kind: PieceKind::Pawn,
            has_moved: false,
            powered_up,
            is_egg: true,
        }
    }

    /// Returns this piece marked as powered up.
    #[inline]
    pub const fn powered(mut self) -> Self {
        self.powered_up = true;
        self
    }

    /// Returns this piece marked as having moved.
    #[inline]
    pub const fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }

    /// Returns true if the slot is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self.kind, PieceKind::None)
    }

    /// Returns true if the slot holds a piece.
    #[inline]
    pub const fn is_occupied(self) -> bool {
        !self.is_empty()
    }

    /// Returns true if sliders and steppers may pass over or onto this slot:
    /// it is empty or holds a Temporary Queen of either color.
    #[inline]
    pub const fn can_be_moved_through(self) -> bool {
        matches!(self.kind, PieceKind::None | PieceKind::TemporaryQueen)
    }

    /// Returns true if the slot holds a piece of the opposite color.
    #[inline]
    pub fn is_enemy_of(self, color: Color) -> bool {
        self.is_occupied() && self.color != color
    }

    /// Returns true if the slot holds a piece of the given color.
    #[inline]
    pub fn is_friend_of(self, color: Color) -> bool {
        self.is_occupied() && self.color == color
    }

    /// Returns true if this is the given kind of the given color.
    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.kind == kind && self.color == color
    }

    /// Returns the material value: the base value, times 1.5 when powered up.
    pub fn value(self) -> f64 {
        let base = self.kind.base_value();
        if self.powered_up {
            base * 1.5
        } else {
            base
        }
    }

    /// Returns the diagram character. Powered pieces are not distinguished.
    #[inline]
    pub const fn to_char(self) -> char {
        self.kind.to_char(self.color)
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::NONE
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty");
        }
        if self.powered_up {
            write!(f, "powered ")?;
        }
        if self.is_egg {
            write!(f, "{} egg", self.color)
        } else {
            write!(f, "{} {}", self.color, self.kind)
        }
    }
}

/// The promotion menu. Discriminants are the selector indices the menu
/// entries occupy above the board squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum PromotionChoice {
    Rook = 1000,
    Knight = 1001,
    Bishop = 1002,
    Queen = 1003,
    Miner = 1005,
}

impl PromotionChoice {
    /// The menu, in display order.
    pub const ALL: [PromotionChoice; 5] = [
        PromotionChoice::Rook,
        PromotionChoice::Knight,
        PromotionChoice::Bishop,
        PromotionChoice::Queen,
        PromotionChoice::Miner,
    ];

    /// Returns the selector index of this menu entry.
    #[inline]
    pub const fn selector(self) -> u16 {
        self as u16
    }

    /// Parses a selector index.
    pub const fn from_selector(selector: u16) -> Option<Self> {
        match selector {
            1000 => Some(PromotionChoice::Rook),
            1001 => Some(PromotionChoice::Knight),
            1002 => Some(PromotionChoice::Bishop),
            1003 => Some(PromotionChoice::Queen),
            1005 => Some(PromotionChoice::Miner),
            _ => None,
        }
    }

    /// Returns the piece kind the pawn becomes.
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Knight => PieceKind::Knight,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Queen => PieceKind::Queen,
            PromotionChoice::Miner => PieceKind::Miner,
        }
    }
}

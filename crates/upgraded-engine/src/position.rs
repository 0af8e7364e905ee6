//! Board state representation.

use std::fmt;
use std::ops::{Index, IndexMut};

use thiserror::Error;
use upgraded_core::{Color, Move, Piece, PieceKind, Square};

/// Problems that make a position unfit to start a game from.
#[derive(Debug, Error, PartialEq)]
pub enum PositionError {
    #[error("{0} has no King on the board")]
    MissingKing(Color),

    #[error("{0} has {1} Kings on the board")]
    ExtraKings(Color, usize),

    #[error("{0} has a negative power pool ({1})")]
    NegativePower(Color, f64),
}

/// Complete game state: 70 slots, power pools, turn and last move.
///
/// The slots are a flat array of `Copy` pieces, so cloning a position for a
/// king-safety probe is a single memcpy.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    /// Slot contents, indexed by [`Square::slot`].
    pub pieces: [Piece; Square::COUNT],

    /// The side to move.
    pub side_to_move: Color,

    /// Power pools, indexed by [`Color::index`].
    pub power: [f64; 2],

    /// The most recent move, if any has been made.
    pub last_move: Option<Move>,

    /// Whether the side to move is in check.
    pub king_in_check: bool,
}

impl Position {
    /// Creates a position with every slot empty, White to move.
    pub fn empty() -> Self {
        Position {
            pieces: [Piece::NONE; Square::COUNT],
            side_to_move: Color::White,
            power: [0.0; 2],
            last_move: None,
            king_in_check: false,
        }
    }

    /// Creates the opening position, with both Miners in their depots and
    /// both Dodos in their nests.
    pub fn startpos() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut position = Position::empty();
        for color in Color::ALL {
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                position.put_at(col as i8, color.back_row(), Piece::new(color, kind));
                position.put_at(col as i8, color.pawn_row(), Piece::new(color, PieceKind::Pawn));
            }
            position.put(Square::depot(color), Piece::new(color, PieceKind::Miner));
            position.put(Square::nest(color), Piece::new(color, PieceKind::Dodo));
        }
        position
    }

    fn put_at(&mut self, col: i8, row: i8, piece: Piece) {
        if let Some(sq) = Square::from_coords(col, row) {
            self.put(sq, piece);
        }
    }

    /// Returns the contents of a slot.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.pieces[sq.slot()]
    }

    /// Places a piece on a slot, replacing whatever was there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.pieces[sq.slot()] = piece;
    }

    /// Empties a slot.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.pieces[sq.slot()] = Piece::NONE;
    }

    /// Returns the power pool of a color.
    #[inline]
    pub fn power(&self, color: Color) -> f64 {
        self.power[color.index()]
    }

    /// Sets the power pool of a color.
    #[inline]
    pub fn set_power(&mut self, color: Color, amount: f64) {
        self.power[color.index()] = amount;
    }

    /// Adds to the power pool of a color.
    #[inline]
    pub fn credit(&mut self, color: Color, amount: f64) {
        self.power[color.index()] += amount;
    }

    /// Returns the board square of the given color's King.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::board().find(|&sq| self.piece_at(sq).is(color, PieceKind::King))
    }

    /// Iterates over the occupied slots holding pieces of the given color.
    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(|sq| (sq, self.piece_at(sq)))
            .filter(move |(_, piece)| piece.is_friend_of(color))
    }

    /// Returns the summed value of every piece of the given color.
    pub fn material(&self, color: Color) -> f64 {
        self.occupied_by(color).map(|(_, piece)| piece.value()).sum()
    }

    /// Checks the invariants a game relies on: one King per color on the
    /// board and non-negative power pools.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::ALL {
            let kings = Square::board()
                .filter(|&sq| self.piece_at(sq).is(color, PieceKind::King))
                .count();
            match kings {
                0 => return Err(PositionError::MissingKing(color)),
                1 => {}
                n => return Err(PositionError::ExtraKings(color, n)),
            }
            if self.power(color) < 0.0 {
                return Err(PositionError::NegativePower(color, self.power(color)));
            }
        }
        Ok(())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Index<Square> for Position {
    type Output = Piece;

    #[inline]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.pieces[sq.slot()]
    }
}

impl IndexMut<Square> for Position {
    #[inline]
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.pieces[sq.slot()]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let piece = Square::from_coords(col, row)
                    .map(|sq| self.piece_at(sq))
                    .unwrap_or(Piece::NONE);
                write!(f, "{} ", piece.to_char())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        for color in Color::ALL {
            writeln!(
                f,
                "{}: depot {} nest {} power {:.1}",
                color,
                self.piece_at(Square::depot(color)).to_char(),
                self.piece_at(Square::nest(color)).to_char(),
                self.power(color)
            )?;
        }
        write!(f, "{} to move", self.side_to_move)?;
        if self.king_in_check {
            write!(f, " (check)")?;
        }
        Ok(())
    }
}

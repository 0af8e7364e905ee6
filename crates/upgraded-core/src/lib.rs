//! Core types for Upgraded Chess.
//!
//! This crate provides the plain value types shared by the rule engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for slot contents
//! - [`Square`] for the 64 board squares and the six off-board slots
//! - [`SquareSet`] for sets of destinations
//! - [`Move`] for a source/destination pair
//! - [`PromotionChoice`] for the promotion menu

mod color;
mod mov;
mod piece;
mod square;
mod square_set;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind, PromotionChoice};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};

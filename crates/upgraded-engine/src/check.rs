//! Check detection.

use crate::movegen::piece_destinations;
use crate::rules::Rules;
use crate::Position;
use upgraded_core::{Color, Square};

/// Returns true if the King of `color` is attacked.
///
/// A color without a King on the board is never in check.
pub fn is_in_check(pos: &Position, rules: &Rules, color: Color) -> bool {
    match pos.king_square(color) {
        Some(king) => is_attacked(pos, rules, king, color.opposite()),
        None => false,
    }
}

/// Returns true if any piece of color `by` threatens `target`.
///
/// Threats are the unfiltered destinations of each piece, including squares
/// it would capture without landing on. Pieces in depots and nests only ever
/// target pass-through squares, so only board squares are scanned.
pub fn is_attacked(pos: &Position, rules: &Rules, target: Square, by: Color) -> bool {
    Square::board().any(|sq| {
        let piece = pos.piece_at(sq);
        piece.is_friend_of(by) && piece_destinations(pos, rules, sq, piece, true).contains(target)
    })
}

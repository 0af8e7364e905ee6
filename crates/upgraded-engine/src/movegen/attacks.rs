//! Step tables and ray walking shared by the per-kind generators.

use crate::Position;
use upgraded_core::{Color, Square, SquareSet};

/// Rook directions as (column, row) deltas.
pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop directions as (column, row) deltas.
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const MINER_STEPS: [(i8, i8); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// Precomputed knight targets per board square.
const KNIGHT_TARGETS: [SquareSet; 64] = compute_targets(&KNIGHT_STEPS);

/// Precomputed king targets per board square.
const KING_TARGETS: [SquareSet; 64] = compute_targets(&KING_STEPS);

/// Precomputed Miner jump targets per board square.
const MINER_TARGETS: [SquareSet; 64] = compute_targets(&MINER_STEPS);

/// Returns the squares a knight on `sq` could jump to on an empty board.
#[inline]
pub fn knight_targets(sq: Square) -> SquareSet {
    lookup(&KNIGHT_TARGETS, sq)
}

/// Returns the squares a king on `sq` could step to on an empty board.
#[inline]
pub fn king_targets(sq: Square) -> SquareSet {
    lookup(&KING_TARGETS, sq)
}

/// Returns the squares exactly two orthogonal steps from `sq`.
#[inline]
pub fn miner_targets(sq: Square) -> SquareSet {
    lookup(&MINER_TARGETS, sq)
}

#[inline]
fn lookup(table: &[SquareSet; 64], sq: Square) -> SquareSet {
    if sq.is_board() {
        table[sq.slot()]
    } else {
        SquareSet::EMPTY
    }
}

/// Computes step targets for all board squares at compile time.
const fn compute_targets<const N: usize>(steps: &[(i8, i8); N]) -> [SquareSet; 64] {
    let mut targets = [SquareSet::EMPTY; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = (sq % 8) as i8;
        let row = (sq / 8) as i8;
        let mut bits = 0u128;

        let mut i = 0;
        while i < N {
            let (dcol, drow) = steps[i];
            let (c, r) = (col + dcol, row + drow);
            if c >= 0 && c < 8 && r >= 0 && r < 8 {
                bits |= 1u128 << ((c + r * 8) as u32);
            }
            i += 1;
        }

        targets[sq] = SquareSet::from_bits(bits);
        sq += 1;
    }

    targets
}

/// Walks a sliding ray from `from` in direction `dir` for a piece of `color`.
///
/// The ray covers pass-through squares and stops at the first other occupied
/// square, which is included when it holds an enemy. With `wrap`, a ray that
/// runs off the board re-enters once from the opposite edge: across a column
/// edge if it left through one, otherwise across the row edge. The re-entered
/// part does not wrap again.
pub fn ray(pos: &Position, color: Color, from: Square, dir: (i8, i8), wrap: bool) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    if !from.is_board() {
        return set;
    }

    let (mut col, mut row) = walk(
        pos,
        color,
        from.col() + dir.0,
        from.row() + dir.1,
        dir,
        &mut set,
    );

    if wrap && Square::from_coords(col, row).is_none() {
        if col >= 8 {
            col -= 8;
        } else if col < 0 {
            col += 8;
        } else if row >= 8 {
            row -= 8;
        } else {
            row += 8;
        }
        walk(pos, color, col, row, dir, &mut set);
    }

    set
}

/// Walks from (`col`, `row`) inclusive and returns the coordinates where the
/// walk stopped.
fn walk(
    pos: &Position,
    color: Color,
    mut col: i8,
    mut row: i8,
    dir: (i8, i8),
    set: &mut SquareSet,
) -> (i8, i8) {
    while let Some(sq) = Square::from_coords(col, row) {
        let piece = pos.piece_at(sq);
        if !piece.can_be_moved_through() {
            if piece.is_enemy_of(color) {
                set.insert(sq);
            }
            break;
        }
        set.insert(sq);
        col += dir.0;
        row += dir.1;
    }
    (col, row)
}

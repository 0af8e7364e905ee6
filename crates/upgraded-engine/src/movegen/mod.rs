//! Move generation.
//!
//! Destinations are produced per slot as a [`SquareSet`]. Each piece kind has
//! its own rule; on top of that every piece that can afford it may "move" to
//! its color's deposit slot to power up. Legal destinations are the
//! candidates that do not leave the mover's own King in check, found by
//! playing each candidate on a copy of the position.

mod attacks;
pub mod perft;

pub use attacks::{king_targets, knight_targets, miner_targets, ray, DIAGONAL, ORTHOGONAL};

use crate::check::is_attacked;
use crate::execute::{apply_move, ApplyMode};
use crate::rules::Rules;
use crate::Position;
use upgraded_core::{Color, Move, Piece, PieceKind, Square, SquareSet};

/// Switches for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenOptions {
    /// Drop destinations that leave the mover's King in check.
    pub filter_king_safety: bool,
    /// Also list squares whose pieces a move would remove without landing on
    /// them (the adjacent pawn of an en passant capture).
    pub include_capture_squares: bool,
}

impl GenOptions {
    /// What a player may actually play.
    pub const LEGAL: GenOptions = GenOptions {
        filter_king_safety: true,
        include_capture_squares: false,
    };

    /// Everything a piece threatens, used for check detection.
    pub const ATTACKS: GenOptions = GenOptions {
        filter_king_safety: false,
        include_capture_squares: true,
    };
}

/// Generates the destinations of whatever stands on `sq`.
pub fn generate(pos: &Position, rules: &Rules, sq: Square, options: GenOptions) -> SquareSet {
    let piece = pos.piece_at(sq);
    if piece.is_empty() {
        return SquareSet::EMPTY;
    }

    let candidates = pseudo_destinations(pos, rules, sq, piece, options.include_capture_squares);
    if options.filter_king_safety {
        retain_legal(pos, rules, sq, candidates)
    } else {
        candidates
    }
}

/// Returns the legal destinations of the piece on `sq`, deposit included.
#[inline]
pub fn legal_destinations(pos: &Position, rules: &Rules, sq: Square) -> SquareSet {
    generate(pos, rules, sq, GenOptions::LEGAL)
}

/// Returns every legal move of the side to move.
pub fn legal_moves(pos: &Position, rules: &Rules) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, _) in pos.occupied_by(pos.side_to_move) {
        for to in legal_destinations(pos, rules, from) {
            moves.push(Move::new(from, to));
        }
    }
    moves
}

/// Returns true if `color` has at least one legal move.
pub fn has_legal_move(pos: &Position, rules: &Rules, color: Color) -> bool {
    pos.occupied_by(color).any(|(from, piece)| {
        pseudo_destinations(pos, rules, from, piece, false)
            .iter()
            .any(|to| leaves_king_safe(pos, rules, Move::new(from, to)))
    })
}

/// Returns true if playing `mv` does not leave the mover's King in check.
///
/// A move that removes the mover's own King from the board is never safe.
pub fn leaves_king_safe(pos: &Position, rules: &Rules, mv: Move) -> bool {
    let color = pos.piece_at(mv.from()).color;
    let had_king = pos.king_square(color).is_some();
    let mut probe = pos.clone();
    apply_move(&mut probe, rules, mv, ApplyMode::Probe);
    match probe.king_square(color) {
        Some(king) => !is_attacked(&probe, rules, king, color.opposite()),
        None => !had_king,
    }
}

/// Returns true if `mv` is a pawn move onto its promotion row.
pub fn is_promotion(pos: &Position, mv: Move) -> bool {
    let piece = pos.piece_at(mv.from());
    let to = mv.to();
    piece.kind == PieceKind::Pawn && to.is_board() && to.row() == piece.color.promotion_row()
}

/// Returns true if `piece` may spend power to be powered up in place.
///
/// Temporary Queens and eggs never power up, and a piece already powered up
/// cannot be powered again.
pub fn can_power_up(pos: &Position, piece: Piece) -> bool {
    piece.is_occupied()
        && piece.kind != PieceKind::TemporaryQueen
        && !piece.powered_up
        && !piece.is_egg
        && pos.power(piece.color) >= piece.value()
}

#[cfg(not(feature = "parallel"))]
fn retain_legal(pos: &Position, rules: &Rules, from: Square, candidates: SquareSet) -> SquareSet {
    candidates
        .iter()
        .filter(|&to| leaves_king_safe(pos, rules, Move::new(from, to)))
        .collect()
}

#[cfg(feature = "parallel")]
fn retain_legal(pos: &Position, rules: &Rules, from: Square, candidates: SquareSet) -> SquareSet {
    use rayon::prelude::*;

    let candidates: Vec<Square> = candidates.iter().collect();
    let legal: Vec<Square> = candidates
        .into_par_iter()
        .filter(|&to| leaves_king_safe(pos, rules, Move::new(from, to)))
        .collect();
    legal.into_iter().collect()
}

/// Returns the destinations of `piece` standing on `sq`, including the deposit
/// slot when the piece can afford to power up. No king-safety filtering.
///
/// `piece` need not actually stand on `sq`; the safe-plant and safe-lay
/// rules use this to ask what a hypothetical piece would threaten.
pub fn pseudo_destinations(
    pos: &Position,
    rules: &Rules,
    sq: Square,
    piece: Piece,
    include_capture_squares: bool,
) -> SquareSet {
    let mut dests = piece_destinations(pos, rules, sq, piece, include_capture_squares);
    if can_power_up(pos, piece) {
        dests.insert(Square::deposit(piece.color));
    }
    dests
}

/// Dispatches to the per-kind rule. Never adds the deposit slot.
pub(crate) fn piece_destinations(
    pos: &Position,
    rules: &Rules,
    sq: Square,
    piece: Piece,
    include_capture_squares: bool,
) -> SquareSet {
    match piece.kind {
        PieceKind::None => SquareSet::EMPTY,
        PieceKind::Pawn => pawn_destinations(pos, sq, piece, include_capture_squares),
        PieceKind::Rook => rook_destinations(pos, sq, piece),
        PieceKind::Knight => knight_destinations(pos, sq, piece),
        PieceKind::Bishop => bishop_destinations(pos, sq, piece),
        PieceKind::Queen | PieceKind::TemporaryQueen => queen_destinations(pos, sq, piece.color),
        PieceKind::King => king_destinations(pos, sq, piece),
        PieceKind::Miner => miner_destinations(pos, sq, piece),
        PieceKind::Dodo => dodo_destinations(pos, rules, sq, piece),
    }
}

/// Knight and King steps may land on pass-through squares and enemies.
#[inline]
fn can_land(pos: &Position, sq: Square, color: Color) -> bool {
    let target = pos.piece_at(sq);
    target.can_be_moved_through() || target.is_enemy_of(color)
}

fn pawn_destinations(
    pos: &Position,
    sq: Square,
    piece: Piece,
    include_capture_squares: bool,
) -> SquareSet {
    let mut dests = SquareSet::EMPTY;
    let color = piece.color;
    let forward = color.forward();

    if let Some(one) = sq.offset(0, forward) {
        if pos.piece_at(one).can_be_moved_through() {
            dests.insert(one);
            if sq.row() == color.pawn_row() {
                if let Some(two) = sq.offset(0, 2 * forward) {
                    if pos.piece_at(two).can_be_moved_through() {
                        dests.insert(two);
                    }
                }
            }
        }
    }

    let last_to = pos.last_move.map(Move::to);
    for side_step in [1, -1] {
        let (Some(diagonal), Some(beside)) = (sq.offset(side_step, forward), sq.offset(side_step, 0))
        else {
            continue;
        };

        let captures_diagonal = pos.piece_at(diagonal).is_enemy_of(color);
        if captures_diagonal {
            dests.insert(diagonal);
        }

        let beside_piece = pos.piece_at(beside);
        let en_passant = if piece.powered_up {
            // Ranged: whatever the opponent just moved beside us can be taken,
            // and the diagonal square may be occupied.
            last_to == Some(beside) && beside_piece.is_enemy_of(color)
        } else {
            sq.row() == color.en_passant_row()
                && pos.piece_at(diagonal).is_empty()
                && beside_piece.is_enemy_of(color)
                && beside_piece.kind == PieceKind::Pawn
                && pos.last_move.is_some_and(|m| m.to() == beside && m.is_double_step())
        };

        if en_passant {
            dests.insert(diagonal);
        }

        // Any diagonal landing by a powered pawn also removes the enemy
        // beside it.
        let removes_beside =
            en_passant || (piece.powered_up && captures_diagonal && beside_piece.is_enemy_of(color));
        if include_capture_squares && removes_beside {
            dests.insert(beside);
        }
    }

    dests
}

fn rook_destinations(pos: &Position, sq: Square, piece: Piece) -> SquareSet {
    let mut dests = SquareSet::EMPTY;
    for dir in ORTHOGONAL {
        dests |= ray(pos, piece.color, sq, dir, false);
    }
    if piece.powered_up {
        if let Some(king) = pos.king_square(piece.color) {
            dests.insert(king);
        }
    }
    dests
}

fn knight_destinations(pos: &Position, sq: Square, piece: Piece) -> SquareSet {
    let mut dests = SquareSet::EMPTY;
    for first in knight_targets(sq) {
        if !can_land(pos, first, piece.color) {
            continue;
        }
        dests.insert(first);
        // A powered knight may chain a second plain jump from any square it
        // could pass over.
        if piece.powered_up && pos.piece_at(first).can_be_moved_through() {
            for second in knight_targets(first) {
                if can_land(pos, second, piece.color) {
                    dests.insert(second);
                }
            }
        }
    }
    dests
}

fn bishop_destinations(pos: &Position, sq: Square, piece: Piece) -> SquareSet {
    let mut dests = SquareSet::EMPTY;
    for dir in DIAGONAL {
        dests |= ray(pos, piece.color, sq, dir, piece.powered_up);
    }
    dests
}

fn queen_destinations(pos: &Position, sq: Square, color: Color) -> SquareSet {
    let mut dests = SquareSet::EMPTY;
    for dir in ORTHOGONAL.into_iter().chain(DIAGONAL) {
        dests |= ray(pos, color, sq, dir, false);
    }
    dests
}

fn king_destinations(pos: &Position, sq: Square, piece: Piece) -> SquareSet {
    let color = piece.color;
    let mut steps = king_targets(sq);
    if piece.powered_up {
        steps |= knight_targets(sq);
    }
    let mut dests: SquareSet = steps.iter().filter(|&to| can_land(pos, to, color)).collect();

    if piece.has_moved {
        return dests;
    }

    let in_check = pos.side_to_move == color && pos.king_in_check;
    if !in_check && sq.is_board() && sq.col() == 4 {
        let row = sq.row();
        let rook_ready = |col: i8| {
            Square::from_coords(col, row).is_some_and(|corner| {
                let rook = pos.piece_at(corner);
                rook.is(color, PieceKind::Rook) && !rook.has_moved
            })
        };
        let all_empty = |cols: &[i8]| {
            cols.iter().all(|&col| {
                Square::from_coords(col, row).is_some_and(|between| pos.piece_at(between).is_empty())
            })
        };

        if rook_ready(7) && all_empty(&[5, 6]) {
            dests.extend(Square::from_coords(6, row));
        }
        if rook_ready(0) && all_empty(&[1, 2, 3]) {
            dests.extend(Square::from_coords(2, row));
        }
    }

    let swap = Square::king_swap(color);
    let pawn = pos.piece_at(swap);
    if pawn.kind == PieceKind::Pawn && !pawn.is_egg {
        dests.insert(swap);
    }

    dests
}

fn miner_destinations(pos: &Position, sq: Square, piece: Piece) -> SquareSet {
    let color = piece.color;
    let mut dests = SquareSet::EMPTY;

    if sq == Square::depot(color) {
        let enemy_king = pos.king_square(color.opposite());
        for target in Square::board() {
            if !pos.piece_at(target).can_be_moved_through() {
                continue;
            }
            let threatens_king =
                enemy_king.is_some_and(|king| miner_jumps(pos, target, color).contains(king));
            if !threatens_king {
                dests.insert(target);
            }
        }

        // A powered Miner may also be planted where it gives check.
        if piece.powered_up {
            if let Some(king) = enemy_king {
                dests |= miner_jumps(pos, king, color.opposite());
            }
        }
    } else if sq.is_board() {
        dests = miner_jumps(pos, sq, color);
        if piece.powered_up {
            dests.insert(Square::depot(color));
        }
    }

    dests
}

/// Two-square orthogonal jumps onto anything not held by `color`.
fn miner_jumps(pos: &Position, sq: Square, color: Color) -> SquareSet {
    miner_targets(sq)
        .iter()
        .filter(|&to| !pos.piece_at(to).is_friend_of(color))
        .collect()
}

fn dodo_destinations(pos: &Position, rules: &Rules, sq: Square, piece: Piece) -> SquareSet {
    let color = piece.color;
    if sq != Square::nest(color) || pos.power(color) < rules.egg_threshold(pos, color) {
        return SquareSet::EMPTY;
    }

    let enemy_king = pos.king_square(color.opposite());
    let egg = Piece::new(color, PieceKind::Pawn);
    let row = color.pawn_row();

    (0..8)
        .filter_map(|col| Square::from_coords(col, row))
        .filter(|&target| pos.piece_at(target).can_be_moved_through())
        .filter(|&target| {
            !enemy_king.is_some_and(|king| pawn_destinations(pos, target, egg, false).contains(king))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn names(set: SquareSet) -> Vec<String> {
        set.iter().map(|s| s.to_algebraic()).collect()
    }

    fn kings(pos: &mut Position, white: &str, black: &str) {
        pos.put(sq(white), Piece::new(Color::White, PieceKind::King).moved());
        pos.put(sq(black), Piece::new(Color::Black, PieceKind::King).moved());
    }

    #[test]
    fn opening_move_count() {
        let pos = Position::startpos();
        let rules = Rules::default();
        assert_eq!(legal_moves(&pos, &rules).len(), 52);
    }

    #[test]
    fn opening_miner_plants_avoid_check() {
        let pos = Position::startpos();
        let rules = Rules::default();
        let plants = legal_destinations(&pos, &rules, Square::WHITE_DEPOT);
        assert_eq!(plants.len(), 31);
        assert!(!plants.contains(sq("e6")));
        assert!(plants.contains(sq("e5")));
        assert!(plants.iter().all(Square::is_board));
    }

    #[test]
    fn opening_king_may_take_its_pawn() {
        let pos = Position::startpos();
        let rules = Rules::default();
        assert_eq!(names(legal_destinations(&pos, &rules, sq("e1"))), vec!["e2"]);
        assert_eq!(names(legal_destinations(&pos, &rules, sq("e8"))), vec!["e7"]);
    }

    #[test]
    fn pawn_steps() {
        let pos = Position::startpos();
        let rules = Rules::default();
        assert_eq!(names(legal_destinations(&pos, &rules, sq("a2"))), vec!["a4", "a3"]);
        assert_eq!(names(legal_destinations(&pos, &rules, sq("h7"))), vec!["h6", "h5"]);
    }

    #[test]
    fn pawn_captures_diagonally() {
        let mut pos = Position::empty();
        kings(&mut pos, "a1", "h8");
        pos.put(sq("d4"), Piece::new(Color::White, PieceKind::Pawn).moved());
        pos.put(sq("e5"), Piece::new(Color::Black, PieceKind::Knight));
        pos.put(sq("d5"), Piece::new(Color::Black, PieceKind::Pawn));
        let rules = Rules::default();
        assert_eq!(names(legal_destinations(&pos, &rules, sq("d4"))), vec!["e5"]);
    }

    #[test]
    fn en_passant_needs_a_double_step() {
        let mut pos = Position::empty();
        kings(&mut pos, "a1", "h8");
        pos.put(sq("e5"), Piece::new(Color::White, PieceKind::Pawn).moved());
        pos.put(sq("d5"), Piece::new(Color::Black, PieceKind::Pawn).moved());
        pos.side_to_move = Color::White;
        let rules = Rules::default();

        pos.last_move = Some(Move::new(sq("d7"), sq("d5")));
        let dests = legal_destinations(&pos, &rules, sq("e5"));
        assert!(dests.contains(sq("d6")));

        let attacks = generate(&pos, &rules, sq("e5"), GenOptions::ATTACKS);
        assert!(attacks.contains(sq("d5")));

        pos.last_move = Some(Move::new(sq("d6"), sq("d5")));
        assert!(!legal_destinations(&pos, &rules, sq("e5")).contains(sq("d6")));
    }

    #[test]
    fn powered_pawn_ranged_en_passant() {
        let mut pos = Position::empty();
        kings(&mut pos, "a1", "h8");
        pos.put(sq("c3"), Piece::new(Color::White, PieceKind::Pawn).moved().powered());
        pos.put(sq("d3"), Piece::new(Color::Black, PieceKind::Rook).moved());
        pos.last_move = Some(Move::new(sq("d8"), sq("d3")));
        let rules = Rules::default();

        let dests = legal_destinations(&pos, &rules, sq("c3"));
        assert_eq!(names(dests), vec!["c4", "d4"]);
        assert!(generate(&pos, &rules, sq("c3"), GenOptions::ATTACKS).contains(sq("d3")));

        pos[sq("c3")].powered_up = false;
        assert_eq!(names(legal_destinations(&pos, &rules, sq("c3"))), vec!["c4"]);
    }

    #[test]
    fn powered_rook_targets_own_king() {
        let mut pos = Position::empty();
        kings(&mut pos, "e1", "e8");
        pos.put(sq("a3"), Piece::new(Color::White, PieceKind::Rook).powered());
        let rules = Rules::default();
        assert!(legal_destinations(&pos, &rules, sq("a3")).contains(sq("e1")));

        pos[sq("a3")].powered_up = false;
        assert!(!legal_destinations(&pos, &rules, sq("a3")).contains(sq("e1")));
    }

    #[test]
    fn powered_knight_chains_jumps() {
        let mut pos = Position::empty();
        kings(&mut pos, "h1", "h8");
        pos.put(sq("a1"), Piece::new(Color::White, PieceKind::Knight).powered());
        let rules = Rules::default();
        let dests = legal_destinations(&pos, &rules, sq("a1"));
        // b3 and c2, then plain jumps from each
        assert!(dests.contains(sq("b3")));
        assert!(dests.contains(sq("c2")));
        assert!(dests.contains(sq("d4")));
        assert!(dests.contains(sq("e3")));
        assert!(dests.contains(sq("a5")));
        assert!(!dests.contains(sq("a1")));
    }

    #[test]
    fn powered_bishop_wraps() {
        let mut pos = Position::empty();
        kings(&mut pos, "a1", "a8");
        pos.put(sq("g2"), Piece::new(Color::White, PieceKind::Bishop).powered());
        let rules = Rules::default();
        let dests = legal_destinations(&pos, &rules, sq("g2"));
        assert!(dests.contains(sq("a4")));
        assert!(dests.contains(sq("e8")));

        pos[sq("g2")].powered_up = false;
        assert!(!legal_destinations(&pos, &rules, sq("g2")).contains(sq("a4")));
    }

    #[test]
    fn castling_both_sides() {
        let mut pos = Position::empty();
        pos.put(sq("e1"), Piece::new(Color::White, PieceKind::King));
        pos.put(sq("a1"), Piece::new(Color::White, PieceKind::Rook));
        pos.put(sq("h1"), Piece::new(Color::White, PieceKind::Rook));
        pos.put(sq("e8"), Piece::new(Color::Black, PieceKind::King).moved());
        let rules = Rules::default();

        let dests = legal_destinations(&pos, &rules, sq("e1"));
        assert!(dests.contains(sq("g1")));
        assert!(dests.contains(sq("c1")));

        pos.put(sq("b1"), Piece::new(Color::White, PieceKind::Knight));
        let dests = legal_destinations(&pos, &rules, sq("e1"));
        assert!(dests.contains(sq("g1")));
        assert!(!dests.contains(sq("c1")));

        pos.king_in_check = true;
        assert!(!legal_destinations(&pos, &rules, sq("e1")).contains(sq("g1")));
    }

    #[test]
    fn powered_king_gains_knight_jumps() {
        let mut pos = Position::empty();
        kings(&mut pos, "d4", "h8");
        pos[sq("d4")].powered_up = true;
        let rules = Rules::default();
        let dests = legal_destinations(&pos, &rules, sq("d4"));
        assert_eq!(dests.len(), 16);
        assert!(dests.contains(sq("e6")));
    }

    #[test]
    fn miner_jumps_two_squares() {
        let mut pos = Position::empty();
        kings(&mut pos, "a1", "h8");
        pos.put(sq("d4"), Piece::new(Color::White, PieceKind::Miner));
        pos.put(sq("d6"), Piece::new(Color::White, PieceKind::TemporaryQueen));
        pos.put(sq("f4"), Piece::new(Color::Black, PieceKind::Pawn));
        let rules = Rules::default();
        assert_eq!(names(legal_destinations(&pos, &rules, sq("d4"))), vec!["b4", "f4", "d2"]);

        pos[sq("d4")].powered_up = true;
        assert!(legal_destinations(&pos, &rules, sq("d4")).contains(Square::WHITE_DEPOT));
    }

    #[test]
    fn powered_depot_miner_may_give_check() {
        let mut pos = Position::empty();
        kings(&mut pos, "a1", "e8");
        pos.put(Square::WHITE_DEPOT, Piece::new(Color::White, PieceKind::Miner).powered());
        let rules = Rules::default();
        let dests = legal_destinations(&pos, &rules, Square::WHITE_DEPOT);
        assert!(dests.contains(sq("e6")));
        assert!(dests.contains(sq("c8")));
        assert!(!dests.contains(sq("e8")));
    }

    #[test]
    fn deposit_requires_enough_power() {
        let mut pos = Position::startpos();
        let rules = Rules::default();
        pos.set_power(Color::White, 4.9);
        assert!(!legal_destinations(&pos, &rules, sq("h1")).contains(Square::WHITE_DEPOSIT));
        assert!(legal_destinations(&pos, &rules, sq("g1")).contains(Square::WHITE_DEPOSIT));

        pos.set_power(Color::White, 5.0);
        assert!(legal_destinations(&pos, &rules, sq("h1")).contains(Square::WHITE_DEPOSIT));

        pos[sq("h1")].powered_up = true;
        assert!(!legal_destinations(&pos, &rules, sq("h1")).contains(Square::WHITE_DEPOSIT));
    }

    #[test]
    fn dodo_lays_on_safe_pawn_row_squares() {
        let mut pos = Position::empty();
        kings(&mut pos, "a1", "e3");
        pos.put(Square::WHITE_NEST, Piece::new(Color::White, PieceKind::Dodo));
        pos.put(sq("b2"), Piece::new(Color::White, PieceKind::Pawn));
        let rules = Rules::default();
        assert!(legal_destinations(&pos, &rules, Square::WHITE_NEST).is_empty());

        pos.set_power(Color::White, 1.0);
        let lays = names(legal_destinations(&pos, &rules, Square::WHITE_NEST));
        // b2 is taken; d2 and f2 would check the King on e3.
        assert_eq!(lays, vec!["a2", "c2", "e2", "g2", "h2"]);
    }

    #[test]
    fn moves_that_expose_the_king_are_dropped() {
        let mut pos = Position::empty();
        kings(&mut pos, "e1", "h8");
        pos.put(sq("e2"), Piece::new(Color::White, PieceKind::Rook).moved());
        pos.put(sq("e7"), Piece::new(Color::Black, PieceKind::Rook).moved());
        let rules = Rules::default();
        let dests = legal_destinations(&pos, &rules, sq("e2"));
        assert!(dests.iter().all(|to| to.col() == 4));
        assert!(dests.contains(sq("e7")));
    }

    #[test]
    fn powered_depot_miner_never_plants_on_its_own_king() {
        let mut pos = Position::empty();
        kings(&mut pos, "e6", "e8");
        pos.put(Square::WHITE_DEPOT, Piece::new(Color::White, PieceKind::Miner).powered());
        let rules = Rules::default();

        let miner = pos[Square::WHITE_DEPOT];
        let pseudo = pseudo_destinations(&pos, &rules, Square::WHITE_DEPOT, miner, false);
        assert!(pseudo.contains(sq("e6")));

        let plants = legal_destinations(&pos, &rules, Square::WHITE_DEPOT);
        assert!(!plants.contains(sq("e6")));
        assert!(plants.contains(sq("c8")));
        assert!(plants.contains(sq("g8")));
    }

    #[test]
    fn powered_pawn_never_lands_on_its_own_king() {
        let mut pos = Position::empty();
        kings(&mut pos, "d4", "h8");
        pos.put(sq("c3"), Piece::new(Color::White, PieceKind::Pawn).moved().powered());
        pos.put(sq("d3"), Piece::new(Color::Black, PieceKind::Rook).moved());
        pos.last_move = Some(Move::new(sq("d8"), sq("d3")));
        let rules = Rules::default();

        let pseudo = pseudo_destinations(&pos, &rules, sq("c3"), pos[sq("c3")], false);
        assert_eq!(names(pseudo), vec!["c4", "d4"]);
        // c4 leaves the rook's check in place and d4 would remove the King.
        assert!(legal_destinations(&pos, &rules, sq("c3")).is_empty());
    }

    #[test]
    fn kingless_side_keeps_its_moves() {
        let mut pos = Position::empty();
        pos.put(sq("a1"), Piece::new(Color::White, PieceKind::Rook).moved());
        let rules = Rules::default();
        assert_eq!(legal_destinations(&pos, &rules, sq("a1")).len(), 14);
    }

    #[test]
    fn has_legal_move_matches_legal_moves() {
        let pos = Position::startpos();
        let rules = Rules::default();
        assert!(has_legal_move(&pos, &rules, Color::White));
        assert!(has_legal_move(&pos, &rules, Color::Black));
    }

    #[test]
    fn promotion_detection() {
        let mut pos = Position::empty();
        pos.put(sq("b7"), Piece::new(Color::White, PieceKind::Pawn).moved());
        pos.put(sq("b2"), Piece::new(Color::Black, PieceKind::Pawn).moved());
        assert!(is_promotion(&pos, Move::new(sq("b7"), sq("b8"))));
        assert!(is_promotion(&pos, Move::new(sq("b2"), sq("b1"))));
        assert!(!is_promotion(&pos, Move::new(sq("b7"), Square::WHITE_DEPOSIT)));
    }
}

//! Move execution.
//!
//! [`apply_move`] plays one move in place: power spending, egg laying, the
//! Rook/King swap, ordinary relocation with castling and en passant, then the
//! Temporary Queen lifecycle, the turn flip and the power economy.

use tracing::trace;

use crate::check::is_in_check;
use crate::movegen::has_legal_move;
use crate::rules::Rules;
use crate::Position;
use upgraded_core::{Color, Move, Piece, PieceKind, PromotionChoice, Square};

/// How much of the bookkeeping to do after the board has changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// King-safety probe: the board, turn and last move are updated; check
    /// state and power credit are not.
    Probe,
    /// Full update without looking for the end of the game.
    Search,
    /// Full update, and detect checkmate or stalemate.
    Live,
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Checkmate { winner: Color },
    Stalemate,
}

/// What a move did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// The piece as it stood on the source slot before the move.
    pub moved: Piece,
    /// The piece removed from the board, or [`Piece::NONE`].
    pub captured: Piece,
    /// Whether the move left the opponent in check. Always false for probes.
    pub gives_check: bool,
    /// Set only in [`ApplyMode::Live`].
    pub end: Option<GameEnd>,
}

/// Plays `mv` with full bookkeeping, without looking for the end of the game.
#[inline]
pub fn make_move(pos: &mut Position, rules: &Rules, mv: Move) -> MoveOutcome {
    apply_move(pos, rules, mv, ApplyMode::Search)
}

/// Promotes the pawn on `mv.from()` and plays `mv`.
///
/// A powered pawn loses its power on promotion and its owner is refunded.
pub fn promote(
    pos: &mut Position,
    rules: &Rules,
    mv: Move,
    choice: PromotionChoice,
    mode: ApplyMode,
) -> MoveOutcome {
    let from = mv.from();
    let mut pawn = pos.piece_at(from);
    assert_eq!(pawn.kind, PieceKind::Pawn, "no pawn to promote on {}", from);

    pawn.kind = choice.kind();
    if pawn.powered_up {
        pawn.powered_up = false;
        pos.credit(pawn.color, rules.economy.promotion_refund);
    }
    pawn.is_egg = false;
    pos.put(from, pawn);

    apply_move(pos, rules, mv, mode)
}

/// Plays `mv` in place.
///
/// The mover is the color of the piece on `mv.from()`.
///
/// # Panics
///
/// Panics if `mv.from()` is empty.
pub fn apply_move(pos: &mut Position, rules: &Rules, mv: Move, mode: ApplyMode) -> MoveOutcome {
    let (from, to) = (mv.from(), mv.to());
    let piece = pos.piece_at(from);
    assert!(piece.is_occupied(), "no piece to move on {}", from);

    let us = piece.color;
    let them = us.opposite();
    let economy = rules.economy;
    let mut captured = Piece::NONE;

    if to == Square::deposit(us) {
        let cost = piece.value();
        pos.credit(us, -cost);
        pos[from].powered_up = true;
        if mode != ApplyMode::Probe {
            trace!(%from, cost, "powered up {}", piece);
        }
    } else if from == Square::nest(us) {
        let cost = rules.egg_threshold(pos, us);
        pos.credit(us, -cost);
        pos.put(to, Piece::egg(us, piece.powered_up));
        if mode != ApplyMode::Probe {
            trace!(%to, cost, "{} laid an egg", us);
        }
    } else if piece.kind == PieceKind::Rook
        && piece.powered_up
        && pos.piece_at(to).is(us, PieceKind::King)
    {
        let king = pos.piece_at(to);
        pos.put(to, piece.moved());
        pos.put(from, king.moved());
    } else {
        captured = pos.piece_at(to);
        let moved = piece.moved();
        pos.put(to, moved);
        pos.clear(from);

        if moved.kind == PieceKind::King && is_castling(from, to) {
            let row = to.row();
            let (rook_col, rook_dest_col) = if to.col() == 2 { (0, 3) } else { (7, 5) };
            if let (Some(rook_from), Some(rook_to)) = (
                Square::from_coords(rook_col, row),
                Square::from_coords(rook_dest_col, row),
            ) {
                let rook = pos.piece_at(rook_from);
                pos.put(rook_to, rook.moved());
                pos.clear(rook_from);
            }
        }

        if moved.kind == PieceKind::Pawn && from.is_board() && to.is_board() && from.col() != to.col() {
            if let Some(beside) = Square::from_coords(to.col(), from.row()) {
                if !moved.powered_up && captured.is_empty() {
                    captured = pos.piece_at(beside);
                    pos.clear(beside);
                } else if moved.powered_up && pos.piece_at(beside).is_enemy_of(us) {
                    let value = pos.piece_at(beside).value();
                    pos.clear(beside);
                    pos.credit(them, economy.victim_share * value);
                    pos.credit(us, economy.captor_share * value);
                }
            }
        }
    }

    for sq in Square::all() {
        if pos.piece_at(sq).is(us, PieceKind::TemporaryQueen) {
            pos.clear(sq);
        }
    }

    let landed = pos.piece_at(to);
    if landed.is(us, PieceKind::Queen) && landed.powered_up && from.is_board() {
        pos.put(from, Piece::new(us, PieceKind::TemporaryQueen).moved());
    }

    pos.side_to_move = them;
    pos.last_move = Some(mv);

    if mode == ApplyMode::Probe {
        pos.king_in_check = false;
        return MoveOutcome {
            moved: piece,
            captured,
            gives_check: false,
            end: None,
        };
    }

    let gives_check = is_in_check(pos, rules, them);
    pos.king_in_check = gives_check;

    // Decided before the opponent is credited for this move.
    let end = if mode == ApplyMode::Live && !has_legal_move(pos, rules, them) {
        Some(if gives_check {
            GameEnd::Checkmate { winner: us }
        } else {
            GameEnd::Stalemate
        })
    } else {
        None
    };

    let value = captured.value();
    pos.credit(them, economy.victim_share * value);
    pos.credit(us, economy.captor_share * value);
    if captured.is_friend_of(us) {
        pos.credit(them, -economy.victim_share * value);
        pos.credit(us, economy.victim_share * value);
    }
    pos.credit(us, economy.move_trickle);
    if gives_check {
        pos.credit(us, economy.checker_bonus);
        pos.credit(them, economy.checked_bonus);
    }

    MoveOutcome {
        moved: piece,
        captured,
        gives_check,
        end,
    }
}

/// A King move of two columns along its row.
#[inline]
fn is_castling(from: Square, to: Square) -> bool {
    from.is_board() && to.is_board() && from.row() == to.row() && (to.col() - from.col()).abs() == 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::new(sq(from), sq(to))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quiet_move_credits_trickle() {
        let mut pos = Position::startpos();
        let rules = Rules::default();
        let outcome = make_move(&mut pos, &rules, mv("e2", "e4"));
        assert!(outcome.captured.is_empty());
        assert!(pos.piece_at(sq("e2")).is_empty());
        assert!(pos.piece_at(sq("e4")).has_moved);
        assert_eq!(pos.side_to_move, Color::Black);
        assert_eq!(pos.last_move, Some(mv("e2", "e4")));
        assert!(close(pos.power(Color::White), 0.1));
        assert!(close(pos.power(Color::Black), 0.0));
    }

    #[test]
    fn capture_credit_split() {
        let mut pos = Position::empty();
        let rules = Rules::default();
        pos.put(sq("a1"), Piece::new(Color::White, PieceKind::King));
        pos.put(sq("h8"), Piece::new(Color::Black, PieceKind::King));
        pos.put(sq("d1"), Piece::new(Color::White, PieceKind::Rook));
        pos.put(sq("d5"), Piece::new(Color::Black, PieceKind::Knight));
        let outcome = make_move(&mut pos, &rules, mv("d1", "d5"));
        assert_eq!(outcome.captured.kind, PieceKind::Knight);
        // Black loses the knight: 0.75 * 3 back, White gets 0.25 * 3 + trickle.
        assert!(close(pos.power(Color::Black), 2.25));
        assert!(close(pos.power(Color::White), 0.85));
    }

    #[test]
    fn capturing_own_piece_refunds_mover() {
        let mut pos = Position::startpos();
        let rules = Rules::default();
        let outcome = make_move(&mut pos, &rules, mv("e1", "e2"));
        assert_eq!(outcome.captured, Piece::new(Color::White, PieceKind::Pawn));
        assert!(close(pos.power(Color::Black), 0.0));
        assert!(close(pos.power(Color::White), 1.1));
        assert!(pos.piece_at(sq("e2")).is(Color::White, PieceKind::King));
    }

    #[test]
    fn check_bonus() {
        let mut pos = Position::empty();
        let rules = Rules::default();
        pos.put(sq("a1"), Piece::new(Color::White, PieceKind::King));
        pos.put(sq("e8"), Piece::new(Color::Black, PieceKind::King));
        pos.put(sq("d1"), Piece::new(Color::White, PieceKind::Rook));
        let outcome = make_move(&mut pos, &rules, mv("d1", "e1"));
        assert!(outcome.gives_check);
        assert!(pos.king_in_check);
        assert!(close(pos.power(Color::White), 0.2));
        assert!(close(pos.power(Color::Black), 0.3));
    }

    #[test]
    fn deposit_powers_up_in_place() {
        let mut pos = Position::startpos();
        let rules = Rules::default();
        pos.set_power(Color::White, 6.0);
        let outcome = make_move(&mut pos, &rules, Move::new(sq("h1"), Square::WHITE_DEPOSIT));
        assert!(outcome.captured.is_empty());
        assert!(pos.piece_at(sq("h1")).powered_up);
        assert!(!pos.piece_at(sq("h1")).has_moved);
        assert!(pos.piece_at(Square::WHITE_DEPOSIT).is_empty());
        assert!(close(pos.power(Color::White), 1.1));
    }

    #[test]
    fn egg_laying() {
        let mut pos = Position::startpos();
        let rules = Rules::default();
        pos.clear(sq("a2"));
        pos[Square::WHITE_NEST].powered_up = true;
        pos.set_power(Color::White, 1.5);
        make_move(&mut pos, &rules, Move::new(Square::WHITE_NEST, sq("a2")));
        assert_eq!(pos.piece_at(sq("a2")), Piece::egg(Color::White, true));
        assert!(pos.piece_at(Square::WHITE_NEST).is(Color::White, PieceKind::Dodo));
        assert!(close(pos.power(Color::White), 0.6));
    }

    #[test]
    fn rook_king_swap() {
        let mut pos = Position::empty();
        let rules = Rules::default();
        pos.put(sq("e1"), Piece::new(Color::White, PieceKind::King));
        pos.put(sq("h8"), Piece::new(Color::Black, PieceKind::King));
        pos.put(sq("a4"), Piece::new(Color::White, PieceKind::Rook).powered());
        let outcome = make_move(&mut pos, &rules, mv("a4", "e1"));
        assert!(outcome.captured.is_empty());
        assert_eq!(pos.piece_at(sq("a4")), Piece::new(Color::White, PieceKind::King).moved());
        assert_eq!(
            pos.piece_at(sq("e1")),
            Piece::new(Color::White, PieceKind::Rook).powered().moved()
        );
    }

    #[test]
    fn castling_moves_the_rook() {
        let mut pos = Position::empty();
        let rules = Rules::default();
        pos.put(sq("e1"), Piece::new(Color::White, PieceKind::King));
        pos.put(sq("a1"), Piece::new(Color::White, PieceKind::Rook));
        pos.put(sq("h1"), Piece::new(Color::White, PieceKind::Rook));
        pos.put(sq("e8"), Piece::new(Color::Black, PieceKind::King));

        let mut kingside = pos.clone();
        make_move(&mut kingside, &rules, mv("e1", "g1"));
        assert!(kingside.piece_at(sq("g1")).is(Color::White, PieceKind::King));
        assert!(kingside.piece_at(sq("f1")).is(Color::White, PieceKind::Rook));
        assert!(kingside.piece_at(sq("f1")).has_moved);
        assert!(kingside.piece_at(sq("h1")).is_empty());

        make_move(&mut pos, &rules, mv("e1", "c1"));
        assert!(pos.piece_at(sq("c1")).is(Color::White, PieceKind::King));
        assert!(pos.piece_at(sq("d1")).is(Color::White, PieceKind::Rook));
        assert!(pos.piece_at(sq("a1")).is_empty());
    }

    #[test]
    fn en_passant_removes_the_pawn() {
        let mut pos = Position::empty();
        let rules = Rules::default();
        pos.put(sq("a1"), Piece::new(Color::White, PieceKind::King));
        pos.put(sq("h8"), Piece::new(Color::Black, PieceKind::King));
        pos.put(sq("e5"), Piece::new(Color::White, PieceKind::Pawn).moved());
        pos.put(sq("d5"), Piece::new(Color::Black, PieceKind::Pawn).moved());
        pos.last_move = Some(mv("d7", "d5"));
        let outcome = make_move(&mut pos, &rules, mv("e5", "d6"));
        assert_eq!(outcome.captured.kind, PieceKind::Pawn);
        assert!(pos.piece_at(sq("d5")).is_empty());
        assert!(pos.piece_at(sq("d6")).is(Color::White, PieceKind::Pawn));
        assert!(close(pos.power(Color::Black), 0.75));
    }

    #[test]
    fn powered_pawn_takes_the_piece_beside_it() {
        let mut pos = Position::empty();
        let rules = Rules::default();
        pos.put(sq("a1"), Piece::new(Color::White, PieceKind::King));
        pos.put(sq("h8"), Piece::new(Color::Black, PieceKind::King));
        pos.put(sq("c3"), Piece::new(Color::White, PieceKind::Pawn).moved().powered());
        pos.put(sq("d3"), Piece::new(Color::Black, PieceKind::Rook).moved());
        pos.last_move = Some(mv("d8", "d3"));
        let outcome = make_move(&mut pos, &rules, mv("c3", "d4"));
        assert!(outcome.captured.is_empty());
        assert!(pos.piece_at(sq("d3")).is_empty());
        // 0.75 * 5 to Black, 0.25 * 5 + trickle to White
        assert!(close(pos.power(Color::Black), 3.75));
        assert!(close(pos.power(Color::White), 1.35));
    }

    #[test]
    fn powered_queen_leaves_a_ghost_that_decays() {
        let mut pos = Position::empty();
        let rules = Rules::default();
        pos.put(sq("a1"), Piece::new(Color::White, PieceKind::King));
        pos.put(sq("h8"), Piece::new(Color::Black, PieceKind::King));
        pos.put(sq("d1"), Piece::new(Color::White, PieceKind::Queen).powered());
        make_move(&mut pos, &rules, mv("d1", "d4"));
        assert!(pos.piece_at(sq("d1")).is(Color::White, PieceKind::TemporaryQueen));

        make_move(&mut pos, &rules, mv("h8", "g8"));
        assert!(pos.piece_at(sq("d1")).is(Color::White, PieceKind::TemporaryQueen));

        make_move(&mut pos, &rules, mv("a1", "a2"));
        assert!(pos.piece_at(sq("d1")).is_empty());
    }

    #[test]
    fn promotion_refunds_power() {
        let mut pos = Position::empty();
        let rules = Rules::default();
        pos.put(sq("a1"), Piece::new(Color::White, PieceKind::King));
        pos.put(sq("h6"), Piece::new(Color::Black, PieceKind::King));
        pos.put(sq("b7"), Piece::egg(Color::White, true));
        promote(&mut pos, &rules, mv("b7", "b8"), PromotionChoice::Queen, ApplyMode::Search);
        let queen = pos.piece_at(sq("b8"));
        assert!(queen.is(Color::White, PieceKind::Queen));
        assert!(!queen.powered_up);
        assert!(!queen.is_egg);
        assert!(close(pos.power(Color::White), 1.1));
    }

    #[test]
    fn live_mode_detects_checkmate() {
        let mut pos = Position::empty();
        let rules = Rules::default();
        pos.put(sq("h8"), Piece::new(Color::Black, PieceKind::King).moved());
        pos.put(sq("g6"), Piece::new(Color::White, PieceKind::King).moved());
        pos.put(sq("a1"), Piece::new(Color::White, PieceKind::Rook).moved());
        let outcome = apply_move(&mut pos, &rules, mv("a1", "a8"), ApplyMode::Live);
        assert_eq!(
            outcome.end,
            Some(GameEnd::Checkmate {
                winner: Color::White
            })
        );

        let mut pos = Position::empty();
        pos.put(sq("h8"), Piece::new(Color::Black, PieceKind::King).moved());
        pos.put(sq("f7"), Piece::new(Color::White, PieceKind::King).moved());
        pos.put(sq("g1"), Piece::new(Color::White, PieceKind::Queen).moved());
        let outcome = apply_move(&mut pos, &rules, mv("g1", "g6"), ApplyMode::Live);
        assert_eq!(outcome.end, Some(GameEnd::Stalemate));
        assert!(!outcome.gives_check);
    }

    #[test]
    fn probe_skips_bookkeeping() {
        let mut pos = Position::startpos();
        let rules = Rules::default();
        apply_move(&mut pos, &rules, mv("e2", "e4"), ApplyMode::Probe);
        assert_eq!(pos.power, [0.0, 0.0]);
        assert_eq!(pos.side_to_move, Color::Black);
    }

    #[test]
    #[should_panic(expected = "no piece to move")]
    fn moving_from_an_empty_slot_panics() {
        let mut pos = Position::startpos();
        make_move(&mut pos, &Rules::default(), mv("e4", "e5"));
    }
}

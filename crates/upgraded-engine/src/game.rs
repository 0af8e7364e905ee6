//! Game management for a front end.
//!
//! [`Game`] owns the live [`Position`] and is the only thing that changes it.
//! Callers query legal destinations, submit whole moves and read the result:
//! - illegal submissions are ignored rather than reported as errors
//! - a pawn reaching its last row waits for a [`PromotionChoice`]
//! - checkmate and stalemate are detected after every move

use tracing::{debug, info};

use crate::check::is_in_check;
use crate::execute::{apply_move, promote, ApplyMode, GameEnd, MoveOutcome};
use crate::movegen::{has_legal_move, is_promotion, legal_destinations};
use crate::position::PositionError;
use crate::rules::Rules;
use crate::Position;
use upgraded_core::{Color, Move, Piece, PromotionChoice, Square, SquareSet};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move may move freely.
    Playing,
    /// The side to move is in check.
    Check,
    /// The side to move is checkmated.
    Checkmate { winner: Color },
    /// The side to move has no legal move and is not in check. A draw.
    Stalemate,
    /// A pawn move is waiting for [`Game::select_promotion`].
    Promoting,
}

impl GameStatus {
    /// Returns true once no further move will be accepted.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }

    /// Returns true for drawn games.
    pub fn is_draw(self) -> bool {
        self == GameStatus::Stalemate
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMove {
    /// The move as submitted.
    pub mov: Move,
    /// The piece that moved, as it stood before the move.
    pub piece: Piece,
    /// The piece removed from the board, or [`Piece::NONE`].
    pub captured: Piece,
    /// The chosen promotion, if the move promoted.
    pub promotion: Option<PromotionChoice>,
}

/// The result of a submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Submission {
    /// The move was played.
    Applied(GameMove),
    /// The move is a promotion; it will be played once a piece is chosen.
    AwaitingPromotion,
    /// The submission was not legal now and nothing changed.
    Ignored,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    rules: Rules,
    status: GameStatus,
    pending_promotion: Option<Move>,
    selection: Option<(Square, SquareSet)>,
    moves: Vec<GameMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game from the opening position under the standard rules.
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// Creates a game from the opening position under the given rules.
    pub fn with_rules(rules: Rules) -> Self {
        Game {
            position: Position::startpos(),
            rules,
            status: GameStatus::Playing,
            pending_promotion: None,
            selection: None,
            moves: Vec::new(),
        }
    }

    /// Creates a game from a custom position.
    ///
    /// The check flag is recomputed for the side to move, and a position with
    /// no legal move starts out finished.
    pub fn from_position(mut position: Position, rules: Rules) -> Result<Self, PositionError> {
        position.validate()?;

        let to_move = position.side_to_move;
        position.king_in_check = is_in_check(&position, &rules, to_move);
        let status = if has_legal_move(&position, &rules, to_move) {
            running_status(&position)
        } else if position.king_in_check {
            GameStatus::Checkmate {
                winner: to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };

        Ok(Game {
            position,
            rules,
            status,
            pending_promotion: None,
            selection: None,
            moves: Vec::new(),
        })
    }

    /// Returns the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the rules in force.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the power pool of a color.
    pub fn power_level(&self, color: Color) -> f64 {
        self.position.power(color)
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.position.last_move
    }

    /// Returns the contents of a slot.
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.position.piece_at(sq)
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the promotion menu while a promotion is pending, and an empty
    /// slice otherwise.
    pub fn promotion_menu(&self) -> &'static [PromotionChoice] {
        if self.status == GameStatus::Promoting {
            &PromotionChoice::ALL
        } else {
            &[]
        }
    }

    /// Returns where the piece on `sq` may move.
    ///
    /// Empty for slots not holding a piece of the side to move, and while the
    /// game is over or a promotion is pending.
    pub fn legal_destinations(&self, sq: Square) -> SquareSet {
        if self.status.is_terminal() || self.status == GameStatus::Promoting {
            return SquareSet::EMPTY;
        }
        if !self.position.piece_at(sq).is_friend_of(self.position.side_to_move) {
            return SquareSet::EMPTY;
        }
        legal_destinations(&self.position, &self.rules, sq)
    }

    /// Selects a slot and caches its legal destinations.
    ///
    /// Selecting a slot with no legal destinations clears the selection.
    pub fn select(&mut self, sq: Square) -> SquareSet {
        let destinations = self.legal_destinations(sq);
        self.selection = if destinations.is_empty() {
            None
        } else {
            Some((sq, destinations))
        };
        destinations
    }

    /// Returns the selected slot and its legal destinations.
    pub fn selection(&self) -> Option<(Square, SquareSet)> {
        self.selection
    }

    /// Submits a move. Illegal moves are ignored. Any selection is cleared.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Submission {
        let destinations = match self.selection.take() {
            Some((selected, destinations)) if selected == from => destinations,
            _ => self.legal_destinations(from),
        };

        let mv = Move::new(from, to);
        if !destinations.contains(to) {
            debug!(%mv, status = ?self.status, "ignored move");
            return Submission::Ignored;
        }

        if is_promotion(&self.position, mv) {
            debug!(%mv, "awaiting promotion choice");
            self.pending_promotion = Some(mv);
            self.status = GameStatus::Promoting;
            return Submission::AwaitingPromotion;
        }

        let outcome = apply_move(&mut self.position, &self.rules, mv, ApplyMode::Live);
        Submission::Applied(self.record(mv, outcome, None))
    }

    /// Completes a pending promotion. Ignored when no promotion is pending.
    pub fn select_promotion(&mut self, choice: PromotionChoice) -> Submission {
        let Some(mv) = self.pending_promotion.take() else {
            debug!(?choice, "ignored promotion choice");
            return Submission::Ignored;
        };

        let outcome = promote(&mut self.position, &self.rules, mv, choice, ApplyMode::Live);
        Submission::Applied(self.record(mv, outcome, Some(choice)))
    }

    fn record(
        &mut self,
        mv: Move,
        outcome: MoveOutcome,
        promotion: Option<PromotionChoice>,
    ) -> GameMove {
        self.status = match outcome.end {
            Some(GameEnd::Checkmate { winner }) => GameStatus::Checkmate { winner },
            Some(GameEnd::Stalemate) => GameStatus::Stalemate,
            None => running_status(&self.position),
        };

        debug!(
            %mv,
            piece = %outcome.moved,
            captured = %outcome.captured,
            white_power = self.position.power(Color::White),
            black_power = self.position.power(Color::Black),
            "applied move"
        );
        match self.status {
            GameStatus::Checkmate { winner } => info!(%winner, "checkmate"),
            GameStatus::Stalemate => info!("stalemate"),
            _ => {}
        }

        let game_move = GameMove {
            mov: mv,
            piece: outcome.moved,
            captured: outcome.captured,
            promotion,
        };
        self.moves.push(game_move);
        game_move
    }
}

fn running_status(position: &Position) -> GameStatus {
    if position.king_in_check {
        GameStatus::Check
    } else {
        GameStatus::Playing
    }
}

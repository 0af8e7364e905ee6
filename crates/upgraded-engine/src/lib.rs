//! Rule engine for Upgraded Chess.
//!
//! Upgraded Chess is classic chess with a power economy on top: captures and
//! every move earn power, which players spend to power up pieces (extending
//! how they move) or to let their Dodo lay egg pawns. Each side also has a
//! Miner that can be planted from its depot.
//!
//! This crate provides:
//! - [`Position`] - 70 slots (the board plus depots, deposits and nests),
//!   power pools, turn and last move
//! - [`movegen`] - per-kind destination generation and the legality filter
//! - [`is_in_check`] - check detection
//! - [`apply_move`] - move execution, including the power economy
//! - [`Rules`] - the tunable economy and egg threshold, loadable from TOML
//! - [`Game`] - a game driven by a front end, with the promotion hand-off
//!
//! # Example
//!
//! ```
//! use upgraded_engine::{Game, GameStatus, Submission};
//! use upgraded_core::Square;
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! assert!(game.legal_destinations(e2).contains(e4));
//! assert!(matches!(game.submit_move(e2, e4), Submission::Applied(_)));
//! assert_eq!(game.status(), GameStatus::Playing);
//! println!("{}", game.position());
//! ```

mod check;
mod execute;
mod game;
pub mod movegen;
mod position;
pub mod rules;

pub use check::{is_attacked, is_in_check};
pub use execute::{apply_move, make_move, promote, ApplyMode, GameEnd, MoveOutcome};
pub use game::{Game, GameMove, GameStatus, Submission};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{
    generate, has_legal_move, legal_destinations, legal_moves, pseudo_destinations, GenOptions,
};
pub use position::{Position, PositionError};
pub use rules::{
    ConfigError, Economy, EggThreshold, EggThresholdConfig, FixedThreshold, FnThreshold,
    MaterialThreshold, Rules, RulesConfig,
};

//! Tunable rules: the power economy and the egg threshold.
//!
//! Everything the move generator and executor need beyond the board itself
//! lives in a [`Rules`] value. The fixed slot layout is not tunable and lives
//! on [`Square`](upgraded_core::Square) instead.

mod config;
mod threshold;

pub use config::{ConfigError, EggThresholdConfig, RulesConfig};
pub use threshold::{EggThreshold, FixedThreshold, FnThreshold, MaterialThreshold};

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use upgraded_core::Color;

use crate::Position;

/// Power credited and refunded by the executor.
///
/// Captures follow a "recycling" split: the side that lost the piece gets
/// `victim_share` of its value back and the capturing side `captor_share`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Economy {
    /// Share of a captured piece's value credited to the side that lost it.
    pub victim_share: f64,
    /// Share of a captured piece's value credited to the capturing side.
    pub captor_share: f64,
    /// Flat credit to the mover on every move.
    pub move_trickle: f64,
    /// Extra credit to the mover when the move gives check.
    pub checker_bonus: f64,
    /// Extra credit to the side put in check.
    pub checked_bonus: f64,
    /// Credit to a player whose powered pawn promotes.
    pub promotion_refund: f64,
}

impl Default for Economy {
    fn default() -> Self {
        Economy {
            victim_share: 0.75,
            captor_share: 0.25,
            move_trickle: 0.1,
            checker_bonus: 0.1,
            checked_bonus: 0.3,
            promotion_refund: 1.0,
        }
    }
}

/// The rule parameters a game is played under.
#[derive(Clone)]
pub struct Rules {
    /// Power credits and refunds applied by every move.
    pub economy: Economy,
    egg_threshold: Arc<dyn EggThreshold>,
}

impl Rules {
    /// Creates rules from an economy and an egg threshold.
    pub fn new(economy: Economy, egg_threshold: impl EggThreshold + 'static) -> Self {
        Rules {
            economy,
            egg_threshold: Arc::new(egg_threshold),
        }
    }

    /// Replaces the egg threshold.
    pub fn with_egg_threshold(mut self, egg_threshold: impl EggThreshold + 'static) -> Self {
        self.egg_threshold = Arc::new(egg_threshold);
        self
    }

    /// Returns the power a Dodo of the given color needs to lay an egg, which
    /// is also what laying one costs.
    #[inline]
    pub fn egg_threshold(&self, position: &Position, color: Color) -> f64 {
        self.egg_threshold.threshold(position, color)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::new(Economy::default(), FixedThreshold::default())
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("economy", &self.economy)
            .field("egg_threshold", &self.egg_threshold.name())
            .finish()
    }
}

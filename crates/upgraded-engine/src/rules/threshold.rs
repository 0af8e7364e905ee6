//! Egg threshold strategies.

use upgraded_core::{Color, PieceKind, Square};

use crate::Position;

/// Decides how much power a Dodo needs to lay an egg.
pub trait EggThreshold: Send + Sync {
    /// Returns the threshold for the given color in the given position.
    fn threshold(&self, position: &Position, color: Color) -> f64;

    /// Short name for diagnostics.
    fn name(&self) -> &str {
        "custom"
    }
}

/// A constant threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedThreshold(pub f64);

impl Default for FixedThreshold {
    fn default() -> Self {
        FixedThreshold(1.0)
    }
}

impl EggThreshold for FixedThreshold {
    fn threshold(&self, _position: &Position, _color: Color) -> f64 {
        self.0
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// A threshold that grows with the material a color still has.
///
/// With `m` the color's material excluding its King and its nested Dodo, the
/// threshold is `7.5 / (1 + 6.5 * e^(-(m - 1) / 3)) - 0.1`: close to 1 with
/// almost no material left and approaching 7.4 with a full army.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterialThreshold;

impl EggThreshold for MaterialThreshold {
    fn threshold(&self, position: &Position, color: Color) -> f64 {
        let king = position
            .king_square(color)
            .map(|sq| position.piece_at(sq).value())
            .unwrap_or(0.0);
        let nest = position.piece_at(Square::nest(color));
        let dodo = if nest.is(color, PieceKind::Dodo) {
            nest.value()
        } else {
            0.0
        };
        let material = position.material(color) - king - dodo;
        7.5 / (1.0 + 6.5 * (-(material - 1.0) / 3.0).exp()) - 0.1
    }

    fn name(&self) -> &str {
        "material"
    }
}

/// Adapts a closure into an [`EggThreshold`].
pub struct FnThreshold<F>(pub F);

impl<F> EggThreshold for FnThreshold<F>
where
    F: Fn(&Position, Color) -> f64 + Send + Sync,
{
    fn threshold(&self, position: &Position, color: Color) -> f64 {
        (self.0)(position, color)
    }
}

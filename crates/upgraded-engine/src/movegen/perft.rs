//! Perft (performance test) for move generator validation.
//!
//! Perft counts the leaf nodes of the legal move tree to a given depth. A pawn
//! move onto its promotion row counts once per promotion choice.

use super::{is_promotion, legal_moves};
use crate::execute::{make_move, promote, ApplyMode};
use crate::rules::Rules;
use crate::Position;
use upgraded_core::{Move, PromotionChoice};

/// Counts the number of leaf nodes at the given depth.
pub fn perft(position: &Position, rules: &Rules, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for m in legal_moves(position, rules) {
        nodes += visit(position, rules, m, depth);
    }
    nodes
}

/// Perft with divide: the node count below each root move, sorted by move.
pub fn perft_divide(position: &Position, rules: &Rules, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(position, rules)
        .into_iter()
        .map(|m| (m.to_string(), visit(position, rules, m, depth.max(1))))
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

fn visit(position: &Position, rules: &Rules, m: Move, depth: u32) -> u64 {
    if is_promotion(position, m) {
        if depth == 1 {
            return PromotionChoice::ALL.len() as u64;
        }
        return PromotionChoice::ALL
            .iter()
            .map(|&choice| {
                let mut next = position.clone();
                promote(&mut next, rules, m, choice, ApplyMode::Search);
                perft(&next, rules, depth - 1)
            })
            .sum();
    }

    if depth == 1 {
        return 1;
    }
    let mut next = position.clone();
    make_move(&mut next, rules, m);
    perft(&next, rules, depth - 1)
}

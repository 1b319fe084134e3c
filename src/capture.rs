//! Capture resolution after a stone is placed.

use std::collections::BTreeSet;

use tracing::debug;

use crate::board::{Board, Color};
use crate::group::analyze;
use crate::position::{neighbors, Position};

/// Remove every opponent chain adjacent to `placed` that has no liberties left.
///
/// Doomed stones are collected first and removed afterwards, so a chain
/// reached from two directions is analyzed and removed once. Returns the
/// removed positions.
pub fn resolve_captures(board: &mut Board, placing: Color, placed: Position) -> BTreeSet<Position> {
    let opp = placing.opposite();
    let mut to_remove: BTreeSet<Position> = BTreeSet::new();

    for n in neighbors(placed) {
        if !board.in_board(n) || to_remove.contains(&n) {
            continue;
        }
        if board.find_stone(n) != Some(opp) {
            continue;
        }
        let group = analyze(board, opp, n);
        if group.is_dead() {
            to_remove.extend(group.stones);
        }
    }

    let opponent = board.player_mut(opp);
    for &pt in &to_remove {
        opponent.remove_stone(pt);
    }

    if !to_remove.is_empty() {
        debug!(color = %opp, count = to_remove.len(), at = %placed, "captured stones");
    }
    to_remove
}

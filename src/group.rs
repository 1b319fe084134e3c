//! Chain and liberty analysis.
//!
//! [`analyze`] flood-fills the 4-connected chain that contains a stone and
//! collects the distinct empty points touching it. The fill uses an explicit
//! stack, so long chains and rings of stones cannot blow the call stack or
//! loop forever: a point enters `stones` or `liberties` at most once.

use std::collections::BTreeSet;

use tracing::trace;

use crate::board::{Board, Color};
use crate::position::{neighbors, Position};

/// A chain of same-colored stones and its liberties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    pub stones: BTreeSet<Position>,
    pub liberties: BTreeSet<Position>,
}

impl Group {
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }
}

/// Compute the chain of `color` containing `start`, plus its liberties.
///
/// `start` is expected to hold a `color` stone. Opponent stones stop the
/// fill and are not liberties; off-board neighbors are skipped.
pub fn analyze(board: &Board, color: Color, start: Position) -> Group {
    let mut group = Group::default();
    group.stones.insert(start);
    let mut stack = vec![start];

    while let Some(pt) = stack.pop() {
        for n in neighbors(pt) {
            if group.stones.contains(&n) || group.liberties.contains(&n) {
                continue;
            }
            if !board.in_board(n) {
                continue;
            }
            match board.find_stone(n) {
                None => {
                    group.liberties.insert(n);
                }
                Some(c) if c == color => {
                    group.stones.insert(n);
                    stack.push(n);
                }
                Some(_) => {}
            }
        }
    }

    trace!(
        %color,
        %start,
        stones = group.stones.len(),
        liberties = group.liberties.len(),
        "analyzed group"
    );
    group
}

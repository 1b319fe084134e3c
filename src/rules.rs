//! Move legality.
//!
//! A move attempt runs through fixed stages:
//!
//! ```text
//! Proposed -> BoundsChecked -> OccupancyChecked -> SpeculativelyApplied
//!          -> CaptureResolved -> SuicideChecked -> Committed | Rejected
//! ```
//!
//! [`validate`] never touches the committed board. It places the stone on a
//! clone, resolves captures there, and hands the clone back only if the
//! mover's chain still has a liberty. Captures are resolved before the
//! suicide test, so a move that takes the last liberty of an enemy chain is
//! legal even when the placed stone had no liberties of its own.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::board::{Board, Color};
use crate::capture::resolve_captures;
use crate::group::analyze;
use crate::position::Position;

/// Why a move was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The point is outside the board
    #[error("{0} is off the board")]
    OutOfBounds(Position),

    /// A stone already sits on the point
    #[error("{0} is not empty")]
    PositionOccupied(Position),

    /// The placed chain would have no liberties after captures
    #[error("suicide at {0}")]
    SuicideMove(Position),
}

impl MoveError {
    /// The stage whose check failed.
    pub fn stage(&self) -> MoveStage {
        match self {
            MoveError::OutOfBounds(_) => MoveStage::BoundsChecked,
            MoveError::PositionOccupied(_) => MoveStage::OccupancyChecked,
            MoveError::SuicideMove(_) => MoveStage::SuicideChecked,
        }
    }

    pub fn position(&self) -> Position {
        match *self {
            MoveError::OutOfBounds(p) | MoveError::PositionOccupied(p) | MoveError::SuicideMove(p) => p,
        }
    }
}

/// Stages of a single move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStage {
    Proposed,
    BoundsChecked,
    OccupancyChecked,
    SpeculativelyApplied,
    CaptureResolved,
    SuicideChecked,
    Committed,
    Rejected,
}

/// Outcome of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub color: Color,
    /// Opponent stones removed by this move
    pub captured: BTreeSet<Position>,
}

/// Check a move by `color` at `pos` against `board`.
///
/// On success returns the board as it stands after the move (stone placed,
/// captures removed) together with a summary. `board` itself is never
/// modified, so a rejected attempt leaves no trace.
pub fn validate(board: &Board, color: Color, pos: Position) -> Result<(Board, Placement), MoveError> {
    if !board.in_board(pos) {
        return Err(MoveError::OutOfBounds(pos));
    }
    if !board.is_empty_at(pos) {
        return Err(MoveError::PositionOccupied(pos));
    }

    let mut draft = board.clone();
    draft.place(pos, color);

    let captured = resolve_captures(&mut draft, color, pos);

    if analyze(&draft, color, pos).is_dead() {
        return Err(MoveError::SuicideMove(pos));
    }

    Ok((
        draft,
        Placement {
            position: pos,
            color,
            captured,
        },
    ))
}

//! The game object handed to front ends.
//!
//! [`Game`] owns the committed board and the turn counter. Placing a stone
//! and advancing the turn are separate calls: [`Game::add_stone`] only says
//! whether the move was legal (and commits it if so), and the caller decides
//! when to call [`Game::next_turn`].

use tracing::{debug, info};

use crate::board::{Board, Color};
use crate::position::Position;
use crate::rules::{validate, MoveError, Placement};

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    /// Starts at 1; odd turns are black's
    turn: u32,
}

impl Game {
    /// An empty `size`x`size` board with black to play.
    pub fn new(size: usize) -> Self {
        info!(size, "new game");
        Self {
            board: Board::new(size),
            turn: 1,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_color(&self) -> Color {
        if self.turn % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn opponent_color(&self) -> Color {
        self.current_color().opposite()
    }

    /// Read-only view of the committed board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play a stone for the current color.
    ///
    /// Returns `true` and commits the placement and its captures if the move
    /// is legal; returns `false` and leaves the game untouched otherwise.
    /// Does not advance the turn.
    pub fn add_stone(&mut self, pos: Position) -> bool {
        self.try_add_stone(pos).is_ok()
    }

    /// Like [`add_stone`](Self::add_stone), reporting why a move was rejected.
    pub fn try_add_stone(&mut self, pos: Position) -> Result<Placement, MoveError> {
        let color = self.current_color();
        match validate(&self.board, color, pos) {
            Ok((draft, placement)) => {
                self.board = draft;
                debug!(%color, at = %pos, captured = placement.captured.len(), "stone committed");
                Ok(placement)
            }
            Err(e) => {
                debug!(%color, at = %pos, stage = ?e.stage(), "move rejected: {e}");
                Err(e)
            }
        }
    }

    /// Whether the current color could legally play at `pos`. No state changes.
    pub fn is_legal(&self, pos: Position) -> bool {
        validate(&self.board, self.current_color(), pos).is_ok()
    }

    /// Advance to the next turn. Call only after a successful `add_stone`
    /// (or to pass).
    pub fn next_turn(&mut self) {
        self.turn += 1;
    }

    pub fn find_stone(&self, pos: Position) -> Option<Color> {
        self.board.find_stone(pos)
    }

    /// Row-major NxN snapshot of the committed board.
    pub fn board_iter(&self) -> Vec<Vec<Option<Color>>> {
        self.board.snapshot()
    }

    /// Reset to an empty board of the same size, black to play.
    pub fn clear(&mut self) {
        info!(size = self.size(), "board cleared");
        self.board = Board::new(self.size());
        self.turn = 1;
    }
}

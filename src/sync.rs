//! A game shared between threads.
//!
//! Every move attempt on a [`SharedGame`] runs inside a single lock, so no
//! caller ever sees a stone placed without its captures, or a committed move
//! whose turn has not advanced yet.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::Color;
use crate::game::Game;
use crate::position::Position;
use crate::rules::{MoveError, Placement};

/// Cloneable handle to one game guarded by one lock.
#[derive(Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Validate, commit and advance the turn as one step.
    pub fn add_stone_and_advance(&self, pos: Position) -> Result<Placement, MoveError> {
        let mut game = self.inner.lock();
        let placement = game.try_add_stone(pos)?;
        game.next_turn();
        Ok(placement)
    }

    /// Play only if it is `color`'s turn. Returns `Ok(None)` when it is not.
    pub fn play_as(&self, color: Color, pos: Position) -> Result<Option<Placement>, MoveError> {
        let mut game = self.inner.lock();
        if game.current_color() != color {
            return Ok(None);
        }
        let placement = game.try_add_stone(pos)?;
        game.next_turn();
        Ok(Some(placement))
    }

    pub fn snapshot(&self) -> Vec<Vec<Option<Color>>> {
        self.inner.lock().board_iter()
    }

    pub fn turn(&self) -> u32 {
        self.inner.lock().turn()
    }

    pub fn current_color(&self) -> Color {
        self.inner.lock().current_color()
    }

    /// Run `f` with the game locked.
    pub fn with<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&self.inner.lock())
    }
}

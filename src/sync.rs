//! Synchronization primitives for sharing a game between threads.
//!
//! A [`SharedGame`] is a cloneable handle to one [`GameState`] behind a
//! single lock. Each call validates and commits under that lock, so two
//! threads racing to play a move never both succeed from the same position.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{GameError, GameState, MoveDelta, MoveSummary};

/// A thread-safe handle to one game.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<GameState>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: GameState) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    /// Parse, validate and commit a move for the side to move.
    pub fn apply_move(&self, token: &str) -> Result<MoveSummary, GameError> {
        self.0.lock().apply_move(token)
    }

    /// Validate a move without committing it.
    pub fn probe(&self, token: &str) -> Result<MoveDelta, GameError> {
        self.0.lock().probe(token)
    }

    /// Read the game under the lock.
    pub fn with_state<R>(&self, read: impl FnOnce(&GameState) -> R) -> R {
        read(&*self.0.lock())
    }
}

impl From<GameState> for SharedGame {
    fn from(game: GameState) -> Self {
        SharedGame::new(game)
    }
}

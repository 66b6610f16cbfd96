//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `scenarios.rs` - Reference positions for pawn, knight and bishop moves
//! - `edge_cases.rs` - Boundary tokens, disambiguation and pins
//! - `castling.rs` - Castling legality and rights bookkeeping
//! - `en_passant.rs` - En passant window and removal
//! - `annotations.rs` - Check and mate annotations
//! - `proptest.rs` - Property-based tests

mod scenarios;

use crate::board::{Board, CastlingRights, Color, GameError, GameState, IllegalMove};

/// A game on `board` with White to move and no castling rights.
pub(super) fn game_on(board: Board) -> GameState {
    GameState::with_position(board, Color::White, CastlingRights::none())
}

/// The rejection reason, panicking on anything that is not an illegal move.
pub(super) fn illegal(result: Result<impl std::fmt::Debug, GameError>) -> IllegalMove {
    match result {
        Err(GameError::Illegal(reason)) => reason,
        other => panic!("expected an illegal move, got {other:?}"),
    }
}

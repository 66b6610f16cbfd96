//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut game = GameState::new();
//! assert!(game.apply_move("1.d4").is_ok());
//! ```

pub use super::{
    parse, Board, BoardBuilder, CastleSide, CastlingRights, Color, GameError, GameState,
    IllegalMove, LegalityEngine, Move, MoveDelta, MoveKind, NotationError, Piece, Square,
};
pub use crate::config::{AnnotationPolicy, RulesConfig};

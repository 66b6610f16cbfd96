//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (file, rank) board coordinate
//! - `CastlingRights` and `CastleSide` - castling state
//! - `Move` and `MoveBuilder` - a parsed notation token

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveBody, MoveBuilder};
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use square::{file_to_index, rank_to_index};

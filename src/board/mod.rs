//! Board representation, notation parsing and move legality.
//!
//! A [`Board`] is a plain 8x8 grid of signed piece codes. Moves arrive as
//! algebraic notation tokens, are parsed into [`Move`] values without
//! looking at the board, and are then resolved against a position by the
//! [`LegalityEngine`]. [`GameState`] ties the pieces together and is the
//! only thing that mutates a board during a game.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameState, Piece};
//!
//! let mut game = GameState::new();
//! game.apply_move("1.e4").unwrap();
//! game.apply_move("1...e5").unwrap();
//! assert!(game.apply_move("2.Ke2").is_ok());
//! assert_eq!(
//!     game.board().piece_at("e2".parse().unwrap()),
//!     Some((Color::White, Piece::King))
//! );
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod game;
mod legality;
mod notation;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, GameError, IllegalMove, NotationError, SquareError};
pub use game::{GameState, MoveSummary, PlyRecord};
pub use legality::{LegalityEngine, LegalityResult, MoveDelta, MoveKind};
pub use notation::{parse, NotationParser};
pub use state::{decode, encode, Board};
pub use types::{CastleSide, CastlingRights, Color, Move, MoveBody, MoveBuilder, Piece, Square};

pub(crate) use types::{file_to_index, rank_to_index};

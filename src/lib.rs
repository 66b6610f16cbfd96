pub mod board;
pub mod config;
pub mod sync;

pub use board::{Board, Color, GameState, LegalityEngine, Move, Piece, Square};
pub use config::RulesConfig;
pub use sync::SharedGame;

//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than writing code grids.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece};
//!
//! let board = BoardBuilder::new()
//!     .place("e1", Color::White, Piece::King)
//!     .place("e8", Color::Black, Piece::King)
//!     .place("a2", Color::White, Piece::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.get(0, 1), Ok(1));
//! ```

use super::{Board, Color, Piece, Square, SquareError};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    error: Option<SquareError>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder::default()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        BoardBuilder {
            pieces: Color::BOTH
                .iter()
                .flat_map(|&color| {
                    board
                        .pieces(color)
                        .map(move |(sq, piece)| (sq, color, piece))
                })
                .collect(),
            error: None,
        }
    }

    /// Place a piece on the board, replacing any occupant.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Place a piece by square name (`"e4"`). The first invalid name is
    /// reported by [`BoardBuilder::build`].
    #[must_use]
    pub fn place(mut self, square: &str, color: Color, piece: Piece) -> Self {
        match square.parse::<Square>() {
            Ok(sq) => self.piece(sq, color, piece),
            Err(err) => {
                self.error.get_or_insert(err);
                self
            }
        }
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board.
    ///
    /// # Errors
    /// Returns the error of the first square name `place` could not read.
    pub fn build(self) -> Result<Board, SquareError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            board.set(square, Some((color, piece)));
        }
        Ok(board)
    }
}

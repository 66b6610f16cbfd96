//! FEN piece-placement field, used for compact fixtures and debug output.

use super::error::BoardError;
use super::{Board, Piece, Square};

impl Board {
    /// Parse the piece-placement field of a FEN string
    /// (`"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`).
    ///
    /// Only the first whitespace-separated field is read, so a full FEN
    /// string is accepted too.
    pub fn from_fen_placement(fen: &str) -> Result<Self, BoardError> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardError::InvalidRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    if file > 8 {
                        return Err(BoardError::TooManyFiles { rank, files: file });
                    }
                    continue;
                }
                let occupant = Piece::from_fen_char(c).ok_or(BoardError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(BoardError::TooManyFiles {
                        rank,
                        files: file + 1,
                    });
                }
                board.set(Square::at(file, rank), Some(occupant));
                file += 1;
            }
        }
        Ok(board)
    }

    /// Render the piece-placement field of a FEN string.
    #[must_use]
    pub fn to_fen_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::at(file, rank)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

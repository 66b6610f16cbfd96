//! Error types for notation parsing, move legality and board access.

use std::fmt;

use super::Square;

/// Error type for malformed notation tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Empty token
    Empty,
    /// No `.` between move number and move body
    MissingSeparator { token: String },
    /// Move number is not a positive integer
    InvalidMoveNumber { found: String },
    /// Move body has a length no notation form allows
    InvalidLength { body: String, len: usize },
    /// Uppercase letter that is not a piece
    InvalidPiece { char: char },
    /// Coordinate outside a-h / 1-8
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Fields that no legal notation combines
    Inconsistent {
        notation: String,
        reason: &'static str,
    },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "Empty move token"),
            NotationError::MissingSeparator { token } => {
                write!(f, "Missing '.' after the move number in '{token}'")
            }
            NotationError::InvalidMoveNumber { found } => {
                write!(f, "Invalid move number '{found}'")
            }
            NotationError::InvalidLength { body, len } => {
                write!(f, "Move body '{body}' has invalid length {len}")
            }
            NotationError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}'")
            }
            NotationError::InvalidSquare { notation } => {
                write!(f, "Invalid square in '{notation}'")
            }
            NotationError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            NotationError::Inconsistent { notation, reason } => {
                write!(f, "Inconsistent move '{notation}': {reason}")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Reason a well-formed move is not allowed in the position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    /// No piece of the named kind can reach the destination
    WrongPiece { notation: String },
    /// A matching piece exists but something stands in its way
    Blocked { notation: String },
    /// Capture marker disagrees with what stands on the destination
    OccupancyMismatch { notation: String, square: Square },
    /// Several pieces fit and the notation does not say which
    AmbiguousMove { notation: String, candidates: usize },
    /// The move would leave the mover's king attacked
    SelfCheck { notation: String },
    /// Rights, path or attacked squares forbid the castle
    CastlingForbidden {
        notation: String,
        reason: &'static str,
    },
    /// Promotion missing on the last rank, or given elsewhere
    InvalidPromotion { notation: String },
    /// `+` or `#` does not match the resulting position
    AnnotationMismatch { notation: String },
}

impl IllegalMove {
    /// The notation of the rejected move.
    #[must_use]
    pub fn notation(&self) -> &str {
        match self {
            IllegalMove::WrongPiece { notation }
            | IllegalMove::Blocked { notation }
            | IllegalMove::OccupancyMismatch { notation, .. }
            | IllegalMove::AmbiguousMove { notation, .. }
            | IllegalMove::SelfCheck { notation }
            | IllegalMove::CastlingForbidden { notation, .. }
            | IllegalMove::InvalidPromotion { notation }
            | IllegalMove::AnnotationMismatch { notation } => notation,
        }
    }
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::WrongPiece { notation } => {
                write!(f, "No piece can make the move '{notation}'")
            }
            IllegalMove::Blocked { notation } => {
                write!(f, "Move '{notation}' is blocked")
            }
            IllegalMove::OccupancyMismatch { notation, square } => {
                write!(f, "Move '{notation}' does not match the occupant of {square}")
            }
            IllegalMove::AmbiguousMove {
                notation,
                candidates,
            } => {
                write!(f, "Ambiguous move '{notation}' ({candidates} candidates)")
            }
            IllegalMove::SelfCheck { notation } => {
                write!(f, "Move '{notation}' leaves the king in check")
            }
            IllegalMove::CastlingForbidden { notation, reason } => {
                write!(f, "Castling '{notation}' not allowed: {reason}")
            }
            IllegalMove::InvalidPromotion { notation } => {
                write!(f, "Invalid promotion in '{notation}'")
            }
            IllegalMove::AnnotationMismatch { notation } => {
                write!(f, "Check annotation of '{notation}' does not match the position")
            }
        }
    }
}

impl std::error::Error for IllegalMove {}

/// Error type for square coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for injected board layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Piece code outside -6..=6
    InvalidCode { square: Square, code: i8 },
    /// FEN placement does not have 8 ranks
    InvalidRankCount { found: usize },
    /// Invalid piece character in FEN placement
    InvalidPiece { char: char },
    /// Too many files in a FEN rank
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidCode { square, code } => {
                write!(f, "Invalid piece code {code} on {square}")
            }
            BoardError::InvalidRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            BoardError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            BoardError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error returned by `GameState::apply_move`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Notation(NotationError),
    Illegal(IllegalMove),
    /// Token numbered for a different full move (strict numbering only)
    MoveNumberMismatch { expected: u32, found: u32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Notation(err) => write!(f, "{err}"),
            GameError::Illegal(err) => write!(f, "{err}"),
            GameError::MoveNumberMismatch { expected, found } => {
                write!(f, "Expected move number {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Notation(err) => Some(err),
            GameError::Illegal(err) => Some(err),
            GameError::MoveNumberMismatch { .. } => None,
        }
    }
}

impl From<NotationError> for GameError {
    fn from(err: NotationError) -> Self {
        GameError::Notation(err)
    }
}

impl From<IllegalMove> for GameError {
    fn from(err: IllegalMove) -> Self {
        GameError::Illegal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_error_missing_separator() {
        let err = NotationError::MissingSeparator {
            token: "e4".to_string(),
        };
        assert!(err.to_string().contains("'e4'"));
    }

    #[test]
    fn test_notation_error_invalid_length() {
        let err = NotationError::InvalidLength {
            body: "Nbbbb3".to_string(),
            len: 6,
        };
        assert!(err.to_string().contains('6'));
        assert!(err.to_string().contains("Nbbbb3"));
    }

    #[test]
    fn test_notation_error_inconsistent() {
        let err = NotationError::Inconsistent {
            notation: "1.xe5".to_string(),
            reason: "pawn capture needs a starting file",
        };
        assert!(err.to_string().contains("starting file"));
    }

    #[test]
    fn test_illegal_move_notation_accessor() {
        let err = IllegalMove::AmbiguousMove {
            notation: "3.Nd2".to_string(),
            candidates: 2,
        };
        assert_eq!(err.notation(), "3.Nd2");
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_illegal_move_occupancy_names_square() {
        let err = IllegalMove::OccupancyMismatch {
            notation: "1.dxe5".to_string(),
            square: "e5".parse().unwrap(),
        };
        assert!(err.to_string().contains("e5"));
    }

    #[test]
    fn test_square_error_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
        let err = SquareError::FileOutOfBounds { file: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_game_error_from_and_source() {
        use std::error::Error;

        let err: GameError = NotationError::Empty.into();
        assert_eq!(err, GameError::Notation(NotationError::Empty));
        assert!(err.source().is_some());

        let err = GameError::MoveNumberMismatch {
            expected: 3,
            found: 4,
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_error_clone() {
        let err = BoardError::InvalidPiece { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}

//! The 8x8 board of signed piece codes.

use super::error::{BoardError, SquareError};
use super::legality::MoveDelta;
use super::{Color, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Signed code for an occupant: 0 = empty, +kind for White, -kind for Black.
#[inline]
#[must_use]
pub const fn encode(occupant: Option<(Color, Piece)>) -> i8 {
    match occupant {
        Some((color, piece)) => color.sign() * piece.code(),
        None => 0,
    }
}

/// Inverse of [`encode`]; `None` for empty squares and invalid codes.
#[inline]
#[must_use]
pub const fn decode(code: i8) -> Option<(Color, Piece)> {
    let color = if code > 0 { Color::White } else { Color::Black };
    match Piece::from_code(code.saturating_abs()) {
        Some(piece) => Some((color, piece)),
        None => None,
    }
}

/// Board position: an 8x8 grid indexed `[rank][file]`.
///
/// The board has no public mutation. `GameState` commits moves through
/// `apply_delta`; the legality engine does the same on scratch copies.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[i8; 8]; 8],
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.set(Square::at(file, 0), Some((Color::White, *piece)));
            board.set(Square::at(file, 7), Some((Color::Black, *piece)));
            board.set(Square::at(file, 1), Some((Color::White, Piece::Pawn)));
            board.set(Square::at(file, 6), Some((Color::Black, Piece::Pawn)));
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[0; 8]; 8],
        }
    }

    /// Build a board from a `[rank][file]` grid of piece codes.
    pub fn from_codes(codes: [[i8; 8]; 8]) -> Result<Self, BoardError> {
        for (rank, row) in codes.iter().enumerate() {
            for (file, &code) in row.iter().enumerate() {
                if code != 0 && decode(code).is_none() {
                    return Err(BoardError::InvalidCode {
                        square: Square::at(file, rank),
                        code,
                    });
                }
            }
        }
        Ok(Board { squares: codes })
    }

    /// Copy of the `[rank][file]` code grid.
    #[must_use]
    pub const fn snapshot(&self) -> [[i8; 8]; 8] {
        self.squares
    }

    /// Piece code at (file, rank).
    pub fn get(&self, file: usize, rank: usize) -> Result<i8, SquareError> {
        let square = Square::try_from((file, rank))?;
        Ok(self.code_at(square))
    }

    /// Whether a signed (file, rank) pair lies on the board.
    #[inline]
    #[must_use]
    pub const fn on_board(file: isize, rank: isize) -> bool {
        file >= 0 && file < 8 && rank >= 0 && rank < 8
    }

    #[inline]
    pub(crate) const fn code_at(&self, sq: Square) -> i8 {
        self.squares[sq.rank()][sq.file()]
    }

    /// Occupant of a square, decoded.
    #[inline]
    #[must_use]
    pub const fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        decode(self.code_at(sq))
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self, sq: Square) -> bool {
        self.code_at(sq) == 0
    }

    /// Whether `sq` holds exactly this piece.
    #[inline]
    #[must_use]
    pub const fn holds(&self, sq: Square, color: Color, piece: Piece) -> bool {
        self.code_at(sq) == color.sign() * piece.code()
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.holds(sq, color, Piece::King))
    }

    /// Every piece of one color with its square, a1 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, occupant: Option<(Color, Piece)>) {
        self.squares[sq.rank()][sq.file()] = encode(occupant);
    }

    /// Write every occupant change of a resolved move.
    pub(crate) fn apply_delta(&mut self, delta: &MoveDelta) {
        for &(sq, occupant) in delta.changes() {
            self.set(sq, occupant);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

//! Parsed notation move and its builder.
//!
//! A `Move` describes what a notation token *claims*: which kind of piece
//! goes where, whether it captures, and which hints the writer gave to tell
//! candidate pieces apart. It knows nothing about the board; the legality
//! engine resolves it into an origin square.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::NotationError;

/// The part of a move that is either a castle or a destination-bearing move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveBody {
    Castle {
        side: CastleSide,
    },
    Standard {
        piece: Piece,
        destination: Square,
        capture: bool,
        from_file: Option<usize>,
        from_rank: Option<usize>,
        promotion: Option<Piece>,
    },
}

/// An immutable, internally consistent notation move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    notation: String,
    number: u32,
    color: Color,
    body: MoveBody,
    check: bool,
    mate: bool,
}

impl Move {
    /// The raw token this move was parsed from.
    #[must_use]
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// Full-move number written in the token (0 when it carried none).
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn body(&self) -> MoveBody {
        self.body
    }

    #[must_use]
    pub const fn is_castle(&self) -> bool {
        matches!(self.body, MoveBody::Castle { .. })
    }

    #[must_use]
    pub const fn castle_side(&self) -> Option<CastleSide> {
        match self.body {
            MoveBody::Castle { side } => Some(side),
            MoveBody::Standard { .. } => None,
        }
    }

    /// Moving piece kind; `None` for castles.
    #[must_use]
    pub const fn piece(&self) -> Option<Piece> {
        match self.body {
            MoveBody::Standard { piece, .. } => Some(piece),
            MoveBody::Castle { .. } => None,
        }
    }

    #[must_use]
    pub const fn destination(&self) -> Option<Square> {
        match self.body {
            MoveBody::Standard { destination, .. } => Some(destination),
            MoveBody::Castle { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self.body, MoveBody::Standard { capture: true, .. })
    }

    #[must_use]
    pub const fn is_pawn_capture(&self) -> bool {
        matches!(
            self.body,
            MoveBody::Standard {
                piece: Piece::Pawn,
                capture: true,
                ..
            }
        )
    }

    /// True when a non-pawn move names its starting file and/or rank.
    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        match self.body {
            MoveBody::Standard {
                piece,
                from_file,
                from_rank,
                ..
            } => !matches!(piece, Piece::Pawn) && (from_file.is_some() || from_rank.is_some()),
            MoveBody::Castle { .. } => false,
        }
    }

    #[must_use]
    pub const fn starting_file(&self) -> Option<usize> {
        match self.body {
            MoveBody::Standard { from_file, .. } => from_file,
            MoveBody::Castle { .. } => None,
        }
    }

    #[must_use]
    pub const fn starting_rank(&self) -> Option<usize> {
        match self.body {
            MoveBody::Standard { from_rank, .. } => from_rank,
            MoveBody::Castle { .. } => None,
        }
    }

    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        match self.body {
            MoveBody::Standard { promotion, .. } => promotion,
            MoveBody::Castle { .. } => None,
        }
    }

    /// Check annotation. A mate annotation counts as check.
    #[must_use]
    pub const fn is_check(&self) -> bool {
        self.check || self.mate
    }

    #[must_use]
    pub const fn is_mate(&self) -> bool {
        self.mate
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

/// Staged construction of a [`Move`].
///
/// Nothing escapes the builder until `build` has checked that the collected
/// fields form one of the shapes notation allows.
#[derive(Clone, Debug)]
pub struct MoveBuilder {
    notation: String,
    number: u32,
    color: Color,
    castle: Option<CastleSide>,
    piece: Piece,
    destination: Option<Square>,
    capture: bool,
    from_file: Option<usize>,
    from_rank: Option<usize>,
    promotion: Option<Piece>,
    check: bool,
    mate: bool,
}

impl MoveBuilder {
    #[must_use]
    pub fn new(notation: impl Into<String>, number: u32, color: Color) -> Self {
        MoveBuilder {
            notation: notation.into(),
            number,
            color,
            castle: None,
            piece: Piece::Pawn,
            destination: None,
            capture: false,
            from_file: None,
            from_rank: None,
            promotion: None,
            check: false,
            mate: false,
        }
    }

    #[must_use]
    pub const fn castle(mut self, side: CastleSide) -> Self {
        self.castle = Some(side);
        self
    }

    #[must_use]
    pub const fn piece(mut self, piece: Piece) -> Self {
        self.piece = piece;
        self
    }

    #[must_use]
    pub const fn destination(mut self, square: Square) -> Self {
        self.destination = Some(square);
        self
    }

    #[must_use]
    pub const fn capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    #[must_use]
    pub const fn from_file(mut self, file: usize) -> Self {
        self.from_file = Some(file);
        self
    }

    #[must_use]
    pub const fn from_rank(mut self, rank: usize) -> Self {
        self.from_rank = Some(rank);
        self
    }

    #[must_use]
    pub const fn promotion(mut self, piece: Piece) -> Self {
        self.promotion = Some(piece);
        self
    }

    #[must_use]
    pub const fn check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    #[must_use]
    pub const fn mate(mut self, mate: bool) -> Self {
        self.mate = mate;
        self
    }

    /// Validate the collected fields and produce the move.
    pub fn build(self) -> Result<Move, NotationError> {
        let body = match self.castle {
            Some(side) => {
                if self.destination.is_some()
                    || self.capture
                    || self.from_file.is_some()
                    || self.from_rank.is_some()
                    || self.promotion.is_some()
                {
                    return Err(self.inconsistent("castle carries square fields"));
                }
                MoveBody::Castle { side }
            }
            None => self.standard_body()?,
        };

        Ok(Move {
            notation: self.notation,
            number: self.number,
            color: self.color,
            body,
            check: self.check,
            mate: self.mate,
        })
    }

    fn standard_body(&self) -> Result<MoveBody, NotationError> {
        let destination = self
            .destination
            .ok_or_else(|| self.inconsistent("missing destination"))?;
        if self.from_file.is_some_and(|f| f >= 8) || self.from_rank.is_some_and(|r| r >= 8) {
            return Err(self.inconsistent("starting coordinate off the board"));
        }

        if self.piece == Piece::Pawn {
            if self.from_rank.is_some() {
                return Err(self.inconsistent("pawn moves take no starting rank"));
            }
            match (self.capture, self.from_file) {
                (true, None) => {
                    return Err(self.inconsistent("pawn capture needs a starting file"))
                }
                (true, Some(file)) if file.abs_diff(destination.file()) != 1 => {
                    return Err(self.inconsistent("pawn captures to an adjacent file"))
                }
                (false, Some(_)) => {
                    return Err(self.inconsistent("pawn advance takes no starting file"))
                }
                _ => {}
            }
            if let Some(promo) = self.promotion {
                if matches!(promo, Piece::Pawn | Piece::King) {
                    return Err(self.inconsistent("cannot promote to pawn or king"));
                }
            }
        } else if self.promotion.is_some() {
            return Err(self.inconsistent("only pawns promote"));
        }

        Ok(MoveBody::Standard {
            piece: self.piece,
            destination,
            capture: self.capture,
            from_file: self.from_file,
            from_rank: self.from_rank,
            promotion: self.promotion,
        })
    }

    fn inconsistent(&self, reason: &'static str) -> NotationError {
        NotationError::Inconsistent {
            notation: self.notation.clone(),
            reason,
        }
    }
}

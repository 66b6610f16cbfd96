//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Index of a file letter (`'a'` = 0). The caller validates the range.
#[inline]
pub(crate) fn file_to_index(file: char) -> usize {
    (file as usize).wrapping_sub('a' as usize)
}

/// Index of a rank digit (`'1'` = 0). The caller validates the range.
#[inline]
pub(crate) fn rank_to_index(rank: char) -> usize {
    (rank as usize).wrapping_sub('1' as usize)
}

/// A square on the chess board, addressed as (file, rank), both 0-7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    file: usize,
    rank: usize,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// Unchecked constructor for coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn at(file: usize, rank: usize) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Square { file, rank }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.file
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.rank
    }

    /// File letter (`'a'..='h'`)
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.file as u8) as char
    }

    /// Rank digit (`'1'..='8'`)
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'1' + self.rank as u8) as char
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank * 8 + self.file
    }

    /// Square reached by a signed (file, rank) step, if it stays on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, file_delta: isize, rank_delta: isize) -> Option<Self> {
        let file = self.file as isize + file_delta;
        let rank = self.rank as isize + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::at(file as usize, rank as usize))
        } else {
            None
        }
    }

    /// All 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|idx| Square::at(idx % 8, idx / 8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square { file, rank })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = match chars[0] {
            'a'..='h' => file_to_index(chars[0]),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let rank = match chars[1] {
            '1'..='8' => rank_to_index(chars[1]),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square { file, rank })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!(sq.file(), 4);
        assert_eq!(sq.rank(), 3);
        assert_eq!(sq.to_string(), "e4");
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a0".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_try_from_bounds() {
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::FileOutOfBounds { file: 8 })
        );
        assert_eq!(
            Square::try_from((0, 9)),
            Err(SquareError::RankOutOfBounds { rank: 9 })
        );
        assert_eq!(Square::try_from((7, 7)), Ok(Square::at(7, 7)));
    }

    #[test]
    fn test_offset_stays_on_board() {
        let a1 = Square::at(0, 0);
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(1, 2), Some(Square::at(1, 2)));
        assert_eq!(Square::at(7, 7).offset(1, 1), None);
    }

    #[test]
    fn test_all_squares_in_index_order() {
        for (idx, sq) in Square::all().enumerate() {
            assert_eq!(sq.index(), idx);
        }
        assert_eq!(Square::all().count(), 64);
    }
}

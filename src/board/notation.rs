//! Algebraic notation parser.
//!
//! Decodes numbered move tokens into [`Move`] values. Examples:
//! `"1.b4"`, `"1.Nb3"`, `"7.Bdb2"`, `"9.B3b2"`, `"4.bxc6"`, `"8.Kdxf5+"`,
//! `"5.0-0"`, `"30.e8=Q#"`, `"12...Nf6"`.
//!
//! Parsing never looks at a board. Whether a disambiguation character is a
//! rank or a file is decided by its code point alone: anything below `'A'`
//! is a rank digit, everything else a file letter.
//!
//! # Examples
//! ```
//! use chess_rules::board::{parse, Color, Piece};
//!
//! let mv = parse("6.Bxg7+", Color::White).unwrap();
//! assert_eq!(mv.piece(), Some(Piece::Bishop));
//! assert!(mv.is_capture());
//! assert!(mv.is_check());
//! assert_eq!(mv.destination().unwrap().to_string(), "g7");
//! ```

use super::error::NotationError;
use super::{file_to_index, rank_to_index, CastleSide, Color, Move, MoveBuilder, Piece, Square};
use crate::config::RulesConfig;

/// Notation parser carrying the notation-related options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotationParser {
    letter_castling: bool,
    require_move_number: bool,
}

impl Default for NotationParser {
    fn default() -> Self {
        NotationParser::new(&RulesConfig::default())
    }
}

/// Parse a token with the default options.
pub fn parse(token: &str, mover: Color) -> Result<Move, NotationError> {
    NotationParser::default().parse(token, mover)
}

impl NotationParser {
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        NotationParser {
            letter_castling: config.letter_castling,
            require_move_number: config.require_move_number,
        }
    }

    /// Parse a numbered move token for the given mover.
    pub fn parse(&self, token: &str, mover: Color) -> Result<Move, NotationError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(NotationError::Empty);
        }

        let (number, body) = self.split_number(token, mover)?;
        let (body, check, mate) = strip_annotations(body);
        if body.is_empty() {
            return Err(NotationError::InvalidLength {
                body: body.to_string(),
                len: 0,
            });
        }

        let builder = MoveBuilder::new(token, number, mover)
            .check(check)
            .mate(mate);

        if let Some(side) = self.castle_side(body) {
            return builder.castle(side).build();
        }

        let (body, promotion) = split_promotion(body)?;
        let chars: Vec<char> = body.chars().collect();
        let Some(&first) = chars.first() else {
            return Err(NotationError::InvalidLength {
                body: body.to_string(),
                len: 0,
            });
        };

        let (piece, rest) = if first.is_uppercase() {
            let piece = Piece::from_letter(first).ok_or(NotationError::InvalidPiece { char: first })?;
            (piece, &chars[1..])
        } else {
            (Piece::Pawn, &chars[..])
        };

        let mut builder = builder.piece(piece);
        if let Some(promo) = promotion {
            builder = builder.promotion(promo);
        }

        let destination = if let Some(pos) = rest.iter().position(|&c| c == 'x') {
            let (prefix, suffix) = (&rest[..pos], &rest[pos + 1..]);
            builder = builder.capture(true);
            builder = if piece == Piece::Pawn {
                match prefix {
                    [] => builder,
                    [file] => builder.from_file(decode_file(*file, body)?),
                    _ => {
                        return Err(NotationError::InvalidLength {
                            body: body.to_string(),
                            len: chars.len(),
                        })
                    }
                }
            } else {
                disambiguate(builder, prefix, body, chars.len())?
            };
            decode_square(suffix, body)?
        } else {
            let allowed = if piece == Piece::Pawn { 2..=2 } else { 2..=4 };
            if !allowed.contains(&rest.len()) {
                return Err(NotationError::InvalidLength {
                    body: body.to_string(),
                    len: chars.len(),
                });
            }
            let split = rest.len() - 2;
            builder = disambiguate(builder, &rest[..split], body, chars.len())?;
            decode_square(&rest[split..], body)?
        };

        builder.destination(destination).build()
    }

    fn split_number<'a>(
        &self,
        token: &'a str,
        mover: Color,
    ) -> Result<(u32, &'a str), NotationError> {
        match token.split_once('.') {
            Some((number, body)) => {
                let number = number
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| NotationError::InvalidMoveNumber {
                        found: number.to_string(),
                    })?;
                let rest = body.trim_start_matches('.');
                // `...` continues black's half of a move.
                if rest.len() != body.len() && mover == Color::White {
                    return Err(NotationError::Inconsistent {
                        notation: token.to_string(),
                        reason: "continuation dots on a white move",
                    });
                }
                Ok((number, rest))
            }
            None if !self.require_move_number => Ok((0, token)),
            None => Err(NotationError::MissingSeparator {
                token: token.to_string(),
            }),
        }
    }

    fn castle_side(&self, body: &str) -> Option<CastleSide> {
        match body {
            "0-0" => Some(CastleSide::King),
            "0-0-0" => Some(CastleSide::Queen),
            "O-O" if self.letter_castling => Some(CastleSide::King),
            "O-O-O" if self.letter_castling => Some(CastleSide::Queen),
            _ => None,
        }
    }
}

/// Strip trailing `+` / `#`, reporting which were present.
fn strip_annotations(mut body: &str) -> (&str, bool, bool) {
    let mut check = false;
    let mut mate = false;
    loop {
        if let Some(rest) = body.strip_suffix('+') {
            check = true;
            body = rest;
        } else if let Some(rest) = body.strip_suffix('#') {
            mate = true;
            body = rest;
        } else {
            return (body, check, mate);
        }
    }
}

fn split_promotion(body: &str) -> Result<(&str, Option<Piece>), NotationError> {
    match body.split_once('=') {
        Some((rest, promo)) => {
            let mut chars = promo.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => match Piece::from_letter(c) {
                    Some(piece) if piece != Piece::King => Ok((rest, Some(piece))),
                    _ => Err(NotationError::InvalidPromotion { char: c }),
                },
                _ => Err(NotationError::InvalidLength {
                    body: body.to_string(),
                    len: body.chars().count(),
                }),
            }
        }
        None => Ok((body, None)),
    }
}

fn disambiguate(
    builder: MoveBuilder,
    chars: &[char],
    body: &str,
    len: usize,
) -> Result<MoveBuilder, NotationError> {
    match chars {
        [] => Ok(builder),
        [c] if (*c as u32) < ('A' as u32) => Ok(builder.from_rank(decode_rank(*c, body)?)),
        [c] => Ok(builder.from_file(decode_file(*c, body)?)),
        [file, rank] => Ok(builder
            .from_file(decode_file(*file, body)?)
            .from_rank(decode_rank(*rank, body)?)),
        _ => Err(NotationError::InvalidLength {
            body: body.to_string(),
            len,
        }),
    }
}

fn decode_file(c: char, body: &str) -> Result<usize, NotationError> {
    match c {
        'a'..='h' => Ok(file_to_index(c)),
        _ => Err(NotationError::InvalidSquare {
            notation: body.to_string(),
        }),
    }
}

fn decode_rank(c: char, body: &str) -> Result<usize, NotationError> {
    match c {
        '1'..='8' => Ok(rank_to_index(c)),
        _ => Err(NotationError::InvalidSquare {
            notation: body.to_string(),
        }),
    }
}

fn decode_square(chars: &[char], body: &str) -> Result<Square, NotationError> {
    match chars {
        [file, rank] => Ok(Square::at(decode_file(*file, body)?, decode_rank(*rank, body)?)),
        _ => Err(NotationError::InvalidSquare {
            notation: body.to_string(),
        }),
    }
}

//! Move legality engine.
//!
//! Resolves a parsed [`Move`] against a position. Every piece kind answers
//! the same question through [`PieceRules`]: which same-color pieces of this
//! kind could land on the destination? The engine then applies the move's
//! disambiguation hints, drops candidates that would leave their own king
//! attacked, and returns the board delta of the single survivor.
//!
//! # Examples
//! ```
//! use chess_rules::board::{parse, Board, CastlingRights, Color, LegalityEngine};
//!
//! let engine = LegalityEngine::default();
//! let board = Board::new();
//! let mv = parse("1.Nf3", Color::White).unwrap();
//! let delta = engine
//!     .is_legal(&mv, &board, CastlingRights::all(), &[])
//!     .unwrap();
//! assert_eq!(delta.from().to_string(), "g1");
//! ```

mod check;
mod kings;
mod knights;
mod pawns;
mod sliders;

use super::error::IllegalMove;
use super::game::PlyRecord;
use super::{Board, CastleSide, CastlingRights, Color, Move, MoveBody, Piece, Square};
use crate::config::{AnnotationPolicy, RulesConfig};

pub(crate) use check::in_check;

/// Legal carries the board delta, Illegal the reason.
pub type LegalityResult = Result<MoveDelta, IllegalMove>;

/// What kind of board change a resolved move makes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    DoubleStep,
    EnPassant,
    Castle(CastleSide),
    Promotion(Piece),
}

/// The effect of a legal move: where the piece came from, what it captured,
/// and the occupant changes that turn the old board into the new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveDelta {
    color: Color,
    piece: Piece,
    from: Square,
    to: Square,
    captured: Option<(Square, Piece)>,
    kind: MoveKind,
    changes: Vec<(Square, Option<(Color, Piece)>)>,
    gives_check: bool,
}

impl MoveDelta {
    /// Plain move, capture, double step or promotion onto `to`.
    pub(crate) fn step(
        board: &Board,
        color: Color,
        piece: Piece,
        from: Square,
        to: Square,
        kind: MoveKind,
    ) -> Self {
        let landed = match kind {
            MoveKind::Promotion(promoted) => promoted,
            _ => piece,
        };
        MoveDelta {
            color,
            piece,
            from,
            to,
            captured: board.piece_on(to).map(|victim| (to, victim)),
            kind,
            changes: vec![(from, None), (to, Some((color, landed)))],
            gives_check: false,
        }
    }

    pub(crate) fn en_passant(color: Color, from: Square, to: Square, victim: Square) -> Self {
        MoveDelta {
            color,
            piece: Piece::Pawn,
            from,
            to,
            captured: Some((victim, Piece::Pawn)),
            kind: MoveKind::EnPassant,
            changes: vec![
                (from, None),
                (victim, None),
                (to, Some((color, Piece::Pawn))),
            ],
            gives_check: false,
        }
    }

    pub(crate) fn castle(color: Color, side: CastleSide) -> Self {
        let rank = color.back_rank();
        let king_from = Square::at(4, rank);
        let king_to = Square::at(side.king_target_file(), rank);
        let rook_from = Square::at(side.rook_file(), rank);
        let rook_to = Square::at(side.rook_target_file(), rank);
        MoveDelta {
            color,
            piece: Piece::King,
            from: king_from,
            to: king_to,
            captured: None,
            kind: MoveKind::Castle(side),
            changes: vec![
                (king_from, None),
                (rook_from, None),
                (king_to, Some((color, Piece::King))),
                (rook_to, Some((color, Piece::Rook))),
            ],
            gives_check: false,
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The moving piece (the pawn, for promotions).
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Captured piece and the square it was removed from.
    #[must_use]
    pub const fn captured(&self) -> Option<(Square, Piece)> {
        self.captured
    }

    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Occupant changes in application order.
    #[must_use]
    pub fn changes(&self) -> &[(Square, Option<(Color, Piece)>)] {
        &self.changes
    }

    /// Whether the opponent's king is attacked after the move.
    #[must_use]
    pub const fn gives_check(&self) -> bool {
        self.gives_check
    }

    /// Castling rights once this move is played.
    #[must_use]
    pub fn rights_after(&self, rights: CastlingRights) -> CastlingRights {
        rights.after_move(self.color, self.piece, self.from, self.to)
    }
}

/// The board-independent request a destination-bearing move makes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Query {
    pub(crate) color: Color,
    pub(crate) piece: Piece,
    pub(crate) destination: Square,
    pub(crate) capture: bool,
    pub(crate) from_file: Option<usize>,
    pub(crate) from_rank: Option<usize>,
    pub(crate) promotion: Option<Piece>,
}

impl Query {
    fn accepts_origin(&self, sq: Square) -> bool {
        self.from_file.map_or(true, |file| sq.file() == file)
            && self.from_rank.map_or(true, |rank| sq.rank() == rank)
    }
}

/// Candidate origins found by one piece kind's scan.
#[derive(Debug, Default)]
pub(crate) struct Candidates {
    /// Pieces that reach the destination, with the delta they would make.
    pub(crate) reachable: Vec<MoveDelta>,
    /// Matching pieces on a line to the destination with something in between.
    pub(crate) blocked: Vec<Square>,
}

/// Movement geometry of one piece kind.
pub(crate) trait PieceRules {
    /// Same-color pieces of this kind that could land on the destination.
    /// Occupancy of the destination has already been checked.
    fn candidates(&self, board: &Board, query: &Query, last: Option<&MoveDelta>) -> Candidates;
}

pub(crate) fn rules_for(piece: Piece) -> &'static dyn PieceRules {
    match piece {
        Piece::Pawn => &pawns::PawnRules,
        Piece::Knight => &knights::KnightRules,
        Piece::Bishop => &sliders::BishopRules,
        Piece::Rook => &sliders::RookRules,
        Piece::Queen => &sliders::QueenRules,
        Piece::King => &kings::KingRules,
    }
}

/// Decides legality of parsed moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegalityEngine {
    annotations: AnnotationPolicy,
}

impl LegalityEngine {
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        LegalityEngine {
            annotations: config.annotations,
        }
    }

    /// Check a move against a position.
    ///
    /// `history` is the list of plies played so far; only its last entry
    /// matters (en passant).
    pub fn is_legal(
        &self,
        mv: &Move,
        board: &Board,
        rights: CastlingRights,
        history: &[PlyRecord],
    ) -> LegalityResult {
        let last = history.last().map(PlyRecord::delta);
        let mut delta = match mv.body() {
            MoveBody::Castle { side } => {
                let delta = kings::castle(board, mv.color(), side, rights, mv.notation())?;
                if check::leaves_king_attacked(board, &delta) {
                    return Err(IllegalMove::SelfCheck {
                        notation: mv.notation().to_string(),
                    });
                }
                delta
            }
            MoveBody::Standard {
                piece,
                destination,
                capture,
                from_file,
                from_rank,
                promotion,
            } => {
                let query = Query {
                    color: mv.color(),
                    piece,
                    destination,
                    capture,
                    from_file,
                    from_rank,
                    promotion,
                };
                let mut found = resolve(board, &query, last, mv.notation())?;
                if found.len() > 1 {
                    return Err(IllegalMove::AmbiguousMove {
                        notation: mv.notation().to_string(),
                        candidates: found.len(),
                    });
                }
                found.pop().ok_or_else(|| IllegalMove::WrongPiece {
                    notation: mv.notation().to_string(),
                })?
            }
        };

        self.annotate(mv, board, rights, &mut delta)?;
        Ok(delta)
    }

    /// Record whether the move checks, and hold `+` / `#` to it.
    fn annotate(
        &self,
        mv: &Move,
        board: &Board,
        rights: CastlingRights,
        delta: &mut MoveDelta,
    ) -> Result<(), IllegalMove> {
        let mut after = board.clone();
        after.apply_delta(delta);
        let opponent = delta.color.opponent();
        delta.gives_check = in_check(&after, opponent);

        if self.annotations == AnnotationPolicy::Trust {
            return Ok(());
        }
        let mismatch = || IllegalMove::AnnotationMismatch {
            notation: mv.notation().to_string(),
        };
        if mv.is_check() && !delta.gives_check {
            return Err(mismatch());
        }
        if mv.is_mate()
            && check::has_legal_reply(&after, opponent, delta.rights_after(rights), Some(delta))
        {
            return Err(mismatch());
        }
        Ok(())
    }
}

/// All self-check-safe deltas matching a destination-bearing query.
pub(crate) fn resolve(
    board: &Board,
    query: &Query,
    last: Option<&MoveDelta>,
    notation: &str,
) -> Result<Vec<MoveDelta>, IllegalMove> {
    check_occupancy(board, query, last, notation)?;
    check_promotion(query, notation)?;

    let found = rules_for(query.piece).candidates(board, query, last);
    let reachable: Vec<MoveDelta> = found
        .reachable
        .into_iter()
        .filter(|delta| query.accepts_origin(delta.from))
        .collect();

    if reachable.is_empty() {
        let notation = notation.to_string();
        return Err(if found.blocked.iter().any(|&sq| query.accepts_origin(sq)) {
            IllegalMove::Blocked { notation }
        } else {
            IllegalMove::WrongPiece { notation }
        });
    }

    let safe: Vec<MoveDelta> = reachable
        .into_iter()
        .filter(|delta| !check::leaves_king_attacked(board, delta))
        .collect();
    if safe.is_empty() {
        return Err(IllegalMove::SelfCheck {
            notation: notation.to_string(),
        });
    }
    Ok(safe)
}

/// The capture marker must agree with what stands on the destination.
/// Kings are never captured.
fn check_occupancy(
    board: &Board,
    query: &Query,
    last: Option<&MoveDelta>,
    notation: &str,
) -> Result<(), IllegalMove> {
    let consistent = match board.piece_at(query.destination) {
        Some((color, _)) if color == query.color => false,
        Some((_, Piece::King)) => false,
        Some(_) => query.capture,
        None if query.capture => {
            query.piece == Piece::Pawn
                && pawns::en_passant_victim(board, query.color, query.destination, last).is_some()
        }
        None => true,
    };
    if consistent {
        Ok(())
    } else {
        Err(IllegalMove::OccupancyMismatch {
            notation: notation.to_string(),
            square: query.destination,
        })
    }
}

/// Pawns reaching the last rank must promote, and nothing else may.
fn check_promotion(query: &Query, notation: &str) -> Result<(), IllegalMove> {
    let on_last_rank = query.piece == Piece::Pawn
        && query.destination.rank() == query.color.pawn_promotion_rank();
    if on_last_rank == query.promotion.is_some() {
        Ok(())
    } else {
        Err(IllegalMove::InvalidPromotion {
            notation: notation.to_string(),
        })
    }
}

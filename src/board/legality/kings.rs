use super::check::is_square_attacked;
use super::{Candidates, MoveDelta, MoveKind, PieceRules, Query};
use crate::board::attack_tables::king_steps;
use crate::board::error::IllegalMove;
use crate::board::{Board, CastleSide, CastlingRights, Color, Piece, Square};

pub(crate) struct KingRules;

impl PieceRules for KingRules {
    fn candidates(&self, board: &Board, query: &Query, _last: Option<&MoveDelta>) -> Candidates {
        let dest = query.destination;
        Candidates {
            reachable: king_steps(dest)
                .iter()
                .filter(|&&from| board.holds(from, query.color, Piece::King))
                .map(|&from| {
                    MoveDelta::step(board, query.color, Piece::King, from, dest, MoveKind::Normal)
                })
                .collect(),
            blocked: Vec::new(),
        }
    }
}

/// Validate a castle and build its delta.
///
/// The king may not start on, pass through or land on an attacked square.
pub(crate) fn castle(
    board: &Board,
    color: Color,
    side: CastleSide,
    rights: CastlingRights,
    notation: &str,
) -> Result<MoveDelta, IllegalMove> {
    let forbidden = |reason: &'static str| IllegalMove::CastlingForbidden {
        notation: notation.to_string(),
        reason,
    };

    if !rights.has(color, side) {
        return Err(forbidden("castling right has been lost"));
    }

    let rank = color.back_rank();
    let king_home = Square::at(4, rank);
    let rook_home = CastlingRights::rook_home(color, side);
    if !board.holds(king_home, color, Piece::King) || !board.holds(rook_home, color, Piece::Rook) {
        return Err(forbidden("king or rook is not on its home square"));
    }

    let (low, high) = if side.rook_file() < 4 {
        (side.rook_file() + 1, 4)
    } else {
        (5, side.rook_file())
    };
    if (low..high).any(|file| !board.is_empty(Square::at(file, rank))) {
        return Err(forbidden("path between king and rook is blocked"));
    }

    let opponent = color.opponent();
    if is_square_attacked(board, king_home, opponent) {
        return Err(forbidden("king is in check"));
    }
    let target = side.king_target_file();
    let king_path = if target > 4 { 5..=target } else { target..=3 };
    if king_path
        .into_iter()
        .any(|file| is_square_attacked(board, Square::at(file, rank), opponent))
    {
        return Err(forbidden("king crosses an attacked square"));
    }

    Ok(MoveDelta::castle(color, side))
}

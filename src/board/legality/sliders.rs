use super::{Candidates, MoveDelta, MoveKind, PieceRules, Query};
use crate::board::attack_tables::{ray, ALL_LINES, DIAGONAL, ORTHOGONAL};
use crate::board::{Board, Piece};

pub(crate) struct BishopRules;
pub(crate) struct RookRules;
pub(crate) struct QueenRules;

impl PieceRules for BishopRules {
    fn candidates(&self, board: &Board, query: &Query, _last: Option<&MoveDelta>) -> Candidates {
        slide(board, query, &DIAGONAL)
    }
}

impl PieceRules for RookRules {
    fn candidates(&self, board: &Board, query: &Query, _last: Option<&MoveDelta>) -> Candidates {
        slide(board, query, &ORTHOGONAL)
    }
}

impl PieceRules for QueenRules {
    fn candidates(&self, board: &Board, query: &Query, _last: Option<&MoveDelta>) -> Candidates {
        slide(board, query, &ALL_LINES)
    }
}

/// Walk each line outward from the destination. The first occupied square
/// is reachable if it is our piece; the next matching piece beyond it is
/// blocked.
fn slide(board: &Board, query: &Query, dirs: &[usize]) -> Candidates {
    let mut found = Candidates::default();
    let dest = query.destination;
    for &dir in dirs {
        let line = ray(dest, dir);
        let Some(first) = line.iter().position(|&sq| !board.is_empty(sq)) else {
            continue;
        };
        if board.holds(line[first], query.color, query.piece) {
            found.reachable.push(MoveDelta::step(
                board,
                query.color,
                query.piece,
                line[first],
                dest,
                MoveKind::Normal,
            ));
        }
        if let Some(&behind) = line[first + 1..]
            .iter()
            .find(|&&sq| board.holds(sq, query.color, query.piece))
        {
            found.blocked.push(behind);
        }
    }
    found
}

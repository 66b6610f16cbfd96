//! Attack detection and check tests.

use super::{kings, resolve, MoveDelta, Query};
use crate::board::attack_tables::{king_steps, knight_jumps, ray, DIAGONAL, ORTHOGONAL};
use crate::board::{Board, CastleSide, CastlingRights, Color, Piece, Square};

/// Whether any piece of `by` attacks `sq`.
pub(crate) fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    // A pawn of `by` attacks diagonally forward, so look one rank behind.
    let pawn_rank = -by.pawn_direction();
    if [-1, 1]
        .into_iter()
        .filter_map(|df| sq.offset(df, pawn_rank))
        .any(|from| board.holds(from, by, Piece::Pawn))
    {
        return true;
    }

    if knight_jumps(sq)
        .iter()
        .any(|&from| board.holds(from, by, Piece::Knight))
    {
        return true;
    }

    if king_steps(sq)
        .iter()
        .any(|&from| board.holds(from, by, Piece::King))
    {
        return true;
    }

    let line_attack = |dirs: &[usize], slider: Piece| {
        dirs.iter().any(|&dir| {
            match ray(sq, dir).iter().find_map(|&s| board.piece_at(s)) {
                Some((color, piece)) => color == by && (piece == slider || piece == Piece::Queen),
                None => false,
            }
        })
    };
    line_attack(&ORTHOGONAL, Piece::Rook) || line_attack(&DIAGONAL, Piece::Bishop)
}

/// Whether `color`'s king is attacked. A side without a king is never in check.
pub(crate) fn in_check(board: &Board, color: Color) -> bool {
    board
        .find_king(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opponent()))
}

/// Whether playing `delta` would leave the mover's own king attacked.
pub(crate) fn leaves_king_attacked(board: &Board, delta: &MoveDelta) -> bool {
    let mut after = board.clone();
    after.apply_delta(delta);
    in_check(&after, delta.color())
}

/// Whether `color` has at least one legal move.
///
/// Probes every destination with every piece kind through the same
/// resolution path parsed moves take, so anything it finds is a move the
/// engine would accept.
pub(crate) fn has_legal_reply(
    board: &Board,
    color: Color,
    rights: CastlingRights,
    last: Option<&MoveDelta>,
) -> bool {
    let accepts = |query: Query| resolve(board, &query, last, "").is_ok_and(|found| !found.is_empty());

    for dest in Square::all() {
        if board.color_on(dest) == Some(color) {
            continue;
        }
        let occupied = !board.is_empty(dest);
        for piece in Piece::ALL {
            let base = Query {
                color,
                piece,
                destination: dest,
                capture: occupied,
                from_file: None,
                from_rank: None,
                promotion: None,
            };
            if piece != Piece::Pawn {
                if accepts(base) {
                    return true;
                }
                continue;
            }

            let promotion = (dest.rank() == color.pawn_promotion_rank()).then_some(Piece::Queen);
            if !occupied && accepts(Query { promotion, ..base }) {
                return true;
            }
            for df in [-1, 1] {
                let Some(file) = dest.file().checked_add_signed(df).filter(|&f| f < 8) else {
                    continue;
                };
                let capture = Query {
                    capture: true,
                    from_file: Some(file),
                    promotion,
                    ..base
                };
                if accepts(capture) {
                    return true;
                }
            }
        }
    }

    CastleSide::BOTH.into_iter().any(|side| {
        kings::castle(board, color, side, rights, "")
            .is_ok_and(|delta| !leaves_king_attacked(board, &delta))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_attacks_forward_only() {
        let board = Board::from_fen_placement("8/8/8/8/3P4/8/8/8").unwrap();
        assert!(is_square_attacked(&board, sq("c5"), Color::White));
        assert!(is_square_attacked(&board, sq("e5"), Color::White));
        assert!(!is_square_attacked(&board, sq("d5"), Color::White));
        assert!(!is_square_attacked(&board, sq("c3"), Color::White));

        let board = Board::from_fen_placement("8/8/8/3p4/8/8/8/8").unwrap();
        assert!(is_square_attacked(&board, sq("e4"), Color::Black));
        assert!(!is_square_attacked(&board, sq("e6"), Color::Black));
    }

    #[test]
    fn test_slider_attacks_stop_at_blockers() {
        let board = Board::from_fen_placement("8/8/8/8/R2p3k/8/8/8").unwrap();
        assert!(is_square_attacked(&board, sq("c4"), Color::White));
        assert!(!is_square_attacked(&board, sq("h4"), Color::White));
        assert!(is_square_attacked(&board, sq("a8"), Color::White));
    }

    #[test]
    fn test_queen_attacks_on_both_lines() {
        let board = Board::from_fen_placement("8/8/8/8/3q4/8/8/8").unwrap();
        assert!(is_square_attacked(&board, sq("d1"), Color::Black));
        assert!(is_square_attacked(&board, sq("g7"), Color::Black));
        assert!(!is_square_attacked(&board, sq("e6"), Color::Black));
    }

    #[test]
    fn test_in_check_without_king() {
        let board = Board::from_fen_placement("8/8/8/8/3q4/8/8/8").unwrap();
        assert!(!in_check(&board, Color::White));
    }

    #[test]
    fn test_start_position_has_replies() {
        let board = Board::new();
        assert!(has_legal_reply(&board, Color::White, CastlingRights::all(), None));
        assert!(has_legal_reply(&board, Color::Black, CastlingRights::all(), None));
    }

    #[test]
    fn test_back_rank_mate_has_no_reply() {
        let board = Board::from_fen_placement("3R2k1/5ppp/8/8/8/8/8/6K1").unwrap();
        assert!(in_check(&board, Color::Black));
        assert!(!has_legal_reply(&board, Color::Black, CastlingRights::none(), None));
    }

    #[test]
    fn test_capture_of_checker_is_a_reply() {
        let board = Board::from_fen_placement("3R2k1/5ppp/8/8/8/8/8/3r2K1").unwrap();
        assert!(has_legal_reply(&board, Color::Black, CastlingRights::none(), None));
    }

    #[test]
    fn test_stalemate_has_no_reply() {
        let board = Board::from_fen_placement("7k/5Q2/6K1/8/8/8/8/8").unwrap();
        assert!(!in_check(&board, Color::Black));
        assert!(!has_legal_reply(&board, Color::Black, CastlingRights::none(), None));
    }
}

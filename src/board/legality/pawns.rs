use super::{Candidates, MoveDelta, MoveKind, PieceRules, Query};
use crate::board::{Board, Color, Piece, Square};

pub(crate) struct PawnRules;

impl PieceRules for PawnRules {
    fn candidates(&self, board: &Board, query: &Query, last: Option<&MoveDelta>) -> Candidates {
        let mut found = Candidates::default();
        let color = query.color;
        let dest = query.destination;
        let back = -color.pawn_direction();
        let kind = query.promotion.map_or(MoveKind::Normal, MoveKind::Promotion);

        if query.capture {
            let Some(from) = query
                .from_file
                .and_then(|file| Square::new(file, dest.rank()))
                .and_then(|sq| sq.offset(0, back))
            else {
                return found;
            };
            if from.file().abs_diff(dest.file()) != 1 || !board.holds(from, color, Piece::Pawn) {
                return found;
            }
            if board.is_empty(dest) {
                if let Some(victim) = en_passant_victim(board, color, dest, last) {
                    found.reachable.push(MoveDelta::en_passant(color, from, dest, victim));
                }
            } else {
                found
                    .reachable
                    .push(MoveDelta::step(board, color, Piece::Pawn, from, dest, kind));
            }
            return found;
        }

        let Some(one) = dest.offset(0, back) else {
            return found;
        };
        if board.holds(one, color, Piece::Pawn) {
            found
                .reachable
                .push(MoveDelta::step(board, color, Piece::Pawn, one, dest, kind));
            return found;
        }

        // Double step from the home rank.
        if let Some(two) = one.offset(0, back) {
            if two.rank() == color.pawn_start_rank() && board.holds(two, color, Piece::Pawn) {
                if board.is_empty(one) {
                    found.reachable.push(MoveDelta::step(
                        board,
                        color,
                        Piece::Pawn,
                        two,
                        dest,
                        MoveKind::DoubleStep,
                    ));
                } else {
                    found.blocked.push(two);
                }
            }
        }
        found
    }
}

/// Square of the pawn an en passant capture onto `dest` would remove.
///
/// Only the immediately preceding ply counts: it must be an opposing
/// double step that landed beside the capturing pawn on `dest`'s file.
pub(crate) fn en_passant_victim(
    board: &Board,
    color: Color,
    dest: Square,
    last: Option<&MoveDelta>,
) -> Option<Square> {
    let last = last?;
    let victim = dest.offset(0, -color.pawn_direction())?;
    let eligible = last.kind() == MoveKind::DoubleStep
        && last.color() == color.opponent()
        && last.to() == victim
        && board.is_empty(dest)
        && board.holds(victim, color.opponent(), Piece::Pawn);
    eligible.then_some(victim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn query(color: Color, dest: &str, capture: bool, from_file: Option<usize>) -> Query {
        Query {
            color,
            piece: Piece::Pawn,
            destination: sq(dest),
            capture,
            from_file,
            from_rank: None,
            promotion: None,
        }
    }

    #[test]
    fn test_single_and_double_step() {
        let board = Board::new();
        let single = PawnRules.candidates(&board, &query(Color::White, "b3", false, None), None);
        assert_eq!(single.reachable.len(), 1);
        assert_eq!(single.reachable[0].from(), sq("b2"));
        assert_eq!(single.reachable[0].kind(), MoveKind::Normal);

        let double = PawnRules.candidates(&board, &query(Color::Black, "e5", false, None), None);
        assert_eq!(double.reachable[0].from(), sq("e7"));
        assert_eq!(double.reachable[0].kind(), MoveKind::DoubleStep);
    }

    #[test]
    fn test_double_step_only_from_home_rank() {
        let board = BoardBuilder::new()
            .place("c3", Color::White, Piece::Pawn)
            .build()
            .unwrap();
        let found = PawnRules.candidates(&board, &query(Color::White, "c5", false, None), None);
        assert!(found.reachable.is_empty());
        assert!(found.blocked.is_empty());
    }

    #[test]
    fn test_double_step_blocked() {
        let board = BoardBuilder::new()
            .place("g2", Color::White, Piece::Pawn)
            .place("g3", Color::Black, Piece::Knight)
            .build()
            .unwrap();
        let found = PawnRules.candidates(&board, &query(Color::White, "g4", false, None), None);
        assert!(found.reachable.is_empty());
        assert_eq!(found.blocked, vec![sq("g2")]);
    }

    #[test]
    fn test_capture_needs_pawn_on_starting_file() {
        let board = BoardBuilder::new()
            .place("d4", Color::White, Piece::Pawn)
            .place("e5", Color::Black, Piece::Rook)
            .build()
            .unwrap();
        let hit = PawnRules.candidates(&board, &query(Color::White, "e5", true, Some(3)), None);
        assert_eq!(hit.reachable[0].captured(), Some((sq("e5"), Piece::Rook)));

        let miss = PawnRules.candidates(&board, &query(Color::White, "e5", true, Some(5)), None);
        assert!(miss.reachable.is_empty());
    }

    #[test]
    fn test_en_passant_window() {
        let board = BoardBuilder::new()
            .place("e5", Color::White, Piece::Pawn)
            .place("d5", Color::Black, Piece::Pawn)
            .build()
            .unwrap();
        let double = MoveDelta::step(
            &BoardBuilder::new().place("d7", Color::Black, Piece::Pawn).build().unwrap(),
            Color::Black,
            Piece::Pawn,
            sq("d7"),
            sq("d5"),
            MoveKind::DoubleStep,
        );
        assert_eq!(
            en_passant_victim(&board, Color::White, sq("d6"), Some(&double)),
            Some(sq("d5"))
        );

        let found = PawnRules.candidates(
            &board,
            &query(Color::White, "d6", true, Some(4)),
            Some(&double),
        );
        assert_eq!(found.reachable[0].kind(), MoveKind::EnPassant);
        assert_eq!(found.reachable[0].captured(), Some((sq("d5"), Piece::Pawn)));

        let single = MoveDelta::step(
            &board,
            Color::Black,
            Piece::Pawn,
            sq("d6"),
            sq("d5"),
            MoveKind::Normal,
        );
        assert_eq!(en_passant_victim(&board, Color::White, sq("d6"), Some(&single)), None);
        assert_eq!(en_passant_victim(&board, Color::White, sq("d6"), None), None);
    }
}

use super::{Candidates, MoveDelta, MoveKind, PieceRules, Query};
use crate::board::attack_tables::knight_jumps;
use crate::board::{Board, Piece};

pub(crate) struct KnightRules;

impl PieceRules for KnightRules {
    fn candidates(&self, board: &Board, query: &Query, _last: Option<&MoveDelta>) -> Candidates {
        let dest = query.destination;
        Candidates {
            reachable: knight_jumps(dest)
                .iter()
                .filter(|&&from| board.holds(from, query.color, Piece::Knight))
                .map(|&from| {
                    MoveDelta::step(board, query.color, Piece::Knight, from, dest, MoveKind::Normal)
                })
                .collect(),
            blocked: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Square};

    fn query(dest: &str) -> Query {
        Query {
            color: Color::White,
            piece: Piece::Knight,
            destination: dest.parse().unwrap(),
            capture: false,
            from_file: None,
            from_rank: None,
            promotion: None,
        }
    }

    #[test]
    fn test_knights_from_start() {
        let board = Board::new();
        let found = KnightRules.candidates(&board, &query("c3"), None);
        let origins: Vec<Square> = found.reachable.iter().map(|delta| delta.from()).collect();
        assert_eq!(origins, vec!["b1".parse().unwrap()]);

        assert!(KnightRules
            .candidates(&board, &query("c5"), None)
            .reachable
            .is_empty());
    }

    #[test]
    fn test_two_knights_reach_d2() {
        let board = Board::from_fen_placement("4k3/8/8/8/8/1N3N2/8/4K3").unwrap();
        let found = KnightRules.candidates(&board, &query("d2"), None);
        assert_eq!(found.reachable.len(), 2);
    }
}

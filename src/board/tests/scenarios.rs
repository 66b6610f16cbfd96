//! Reference positions: the starting layout, then the same layout with the
//! d-pawn on d4 and an extra bishop on e5, with single pieces swapped in.

use super::{game_on, illegal};
use crate::board::{Board, BoardBuilder, Color, IllegalMove, MoveKind, Piece};

const START: [[i8; 8]; 8] = [
    [4, 2, 3, 5, 6, 3, 2, 4],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [-1, -1, -1, -1, -1, -1, -1, -1],
    [-4, -2, -3, -5, -6, -3, -2, -4],
];

/// d-pawn advanced to d4, a bishop of `e5_code`'s color on e5.
fn opened(e5_code: i8) -> [[i8; 8]; 8] {
    let mut codes = START;
    codes[1][3] = 0;
    codes[3][3] = 1;
    codes[4][4] = e5_code;
    codes
}

fn board(codes: [[i8; 8]; 8]) -> Board {
    Board::from_codes(codes).unwrap()
}

#[test]
fn test_initial_layout_matches_codes() {
    let fresh = Board::new();
    for (rank, row) in START.iter().enumerate() {
        for (file, &code) in row.iter().enumerate() {
            assert_eq!(fresh.get(file, rank), Ok(code), "file {file} rank {rank}");
        }
    }
}

#[test]
fn test_pawn_double_step() {
    let game = game_on(board(START));
    let delta = game.probe("1.b4").unwrap();
    assert_eq!(delta.kind(), MoveKind::DoubleStep);
    assert_eq!(delta.from().to_string(), "b2");
}

#[test]
fn test_pawn_cannot_reach_b6() {
    let game = game_on(board(START));
    assert!(matches!(
        illegal(game.probe("1.b6")),
        IllegalMove::WrongPiece { .. }
    ));
}

#[test]
fn test_pawn_capture() {
    let mut game = game_on(board(opened(-3)));
    let summary = game.apply_move("1.dxe5").unwrap();
    assert_eq!(summary.captured, Some(Piece::Bishop));
    assert_eq!(
        game.board().piece_at("e5".parse().unwrap()),
        Some((Color::White, Piece::Pawn))
    );
}

#[test]
fn test_pawn_capture_own_piece() {
    let game = game_on(board(opened(3)));
    assert!(matches!(
        illegal(game.probe("1.dxe5")),
        IllegalMove::OccupancyMismatch { .. }
    ));
}

#[test]
fn test_knight_move() {
    let game = game_on(board(opened(3)));
    assert_eq!(game.probe("1.Nc3").unwrap().from().to_string(), "b1");
}

#[test]
fn test_knight_out_of_reach() {
    let game = game_on(board(opened(3)));
    assert!(matches!(
        illegal(game.probe("1.Nc5")),
        IllegalMove::WrongPiece { .. }
    ));
}

#[test]
fn test_knight_from_e4_reaches_both_sides() {
    // c3 and c5 are both a knight's jump from e4.
    let board = BoardBuilder::new()
        .place("e4", Color::White, Piece::Knight)
        .build()
        .unwrap();
    let game = game_on(board);
    assert!(game.probe("1.Nc3").is_ok());
    assert!(game.probe("1.Nc5").is_ok());
    assert!(matches!(
        illegal(game.probe("1.Nc4")),
        IllegalMove::WrongPiece { .. }
    ));
}

#[test]
fn test_knight_capture() {
    let mut codes = opened(3);
    codes[2][2] = -4;
    assert!(game_on(board(codes)).probe("1.Nxc3").is_ok());

    codes[2][2] = 4;
    assert!(matches!(
        illegal(game_on(board(codes)).probe("1.Nxc3")),
        IllegalMove::OccupancyMismatch { .. }
    ));
}

#[test]
fn test_bishop_move() {
    let game = game_on(board(opened(3)));
    assert_eq!(game.probe("1.Be3").unwrap().from().to_string(), "c1");
}

#[test]
fn test_bishop_onto_occupied_square_without_capture() {
    let game = game_on(board(opened(3)));
    assert!(matches!(
        illegal(game.probe("1.Bb8")),
        IllegalMove::OccupancyMismatch { .. }
    ));
}

#[test]
fn test_bishop_blocked_move() {
    let game = game_on(board(opened(3)));
    assert!(matches!(
        illegal(game.probe("1.Ba3")),
        IllegalMove::Blocked { .. }
    ));
}

#[test]
fn test_bishop_capture() {
    let mut codes = opened(3);
    codes[2][4] = -4;
    assert!(game_on(board(codes)).probe("1.Bxe3").is_ok());
}

#[test]
fn test_bishop_capture_on_empty_square() {
    let mut codes = opened(3);
    codes[2][2] = 4;
    assert!(matches!(
        illegal(game_on(board(codes)).probe("1.Bxd2")),
        IllegalMove::OccupancyMismatch { .. }
    ));
}

#[test]
fn test_bishop_blocked_capture() {
    let mut codes = START;
    codes[2][2] = 4;
    codes[2][4] = -2;
    codes[3][3] = 1;
    codes[4][4] = 3;
    assert!(matches!(
        illegal(game_on(board(codes)).probe("1.Bxe3")),
        IllegalMove::Blocked { .. }
    ));
}

#[test]
fn test_bishop_long_diagonal() {
    let open = BoardBuilder::new()
        .place("e4", Color::White, Piece::Bishop)
        .place("c2", Color::Black, Piece::Rook)
        .build()
        .unwrap();
    assert!(game_on(open).probe("1.Bxc2").is_ok());

    let blocked = BoardBuilder::new()
        .place("e4", Color::White, Piece::Bishop)
        .place("d3", Color::Black, Piece::Knight)
        .place("c2", Color::Black, Piece::Rook)
        .build()
        .unwrap();
    assert!(matches!(
        illegal(game_on(blocked).probe("1.Bxc2")),
        IllegalMove::Blocked { .. }
    ));
}

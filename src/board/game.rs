//! Game state: the authoritative board, history and castling rights.
//!
//! [`GameState::apply_move`] is the only way a board changes once a game is
//! running. A token is parsed for the side to move, checked against a
//! snapshot of the position, and committed only when legal.
//!
//! # Examples
//! ```
//! use chess_rules::board::{Color, GameState};
//!
//! let mut game = GameState::new();
//! game.apply_move("1.e4").unwrap();
//! game.apply_move("1...e5").unwrap();
//! let summary = game.apply_move("2.Nf3").unwrap();
//! assert_eq!(summary.from.to_string(), "g1");
//! assert_eq!(game.side_to_move(), Color::Black);
//! assert_eq!(game.fullmove_number(), 2);
//! ```

use super::error::GameError;
use super::legality::{LegalityEngine, MoveDelta, MoveKind};
use super::notation::NotationParser;
use super::{Board, CastlingRights, Color, Move, Piece, Square};
use crate::config::RulesConfig;

/// A committed move and the board change it made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlyRecord {
    mv: Move,
    delta: MoveDelta,
}

impl PlyRecord {
    #[must_use]
    pub const fn mv(&self) -> &Move {
        &self.mv
    }

    #[must_use]
    pub const fn delta(&self) -> &MoveDelta {
        &self.delta
    }
}

/// What a committed move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSummary {
    /// Zero-based index into the history.
    pub ply: usize,
    pub number: u32,
    pub color: Color,
    pub notation: String,
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    pub gives_check: bool,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    history: Vec<PlyRecord>,
    rights: CastlingRights,
    side_to_move: Color,
    fullmove: u32,
    config: RulesConfig,
    engine: LegalityEngine,
    parser: NotationParser,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, White to move, default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Starting position with the given rules.
    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Self::with_position_and_config(Board::new(), Color::White, CastlingRights::all(), config)
    }

    /// Injected position with default rules.
    #[must_use]
    pub fn with_position(board: Board, side_to_move: Color, rights: CastlingRights) -> Self {
        Self::with_position_and_config(board, side_to_move, rights, RulesConfig::default())
    }

    #[must_use]
    pub fn with_position_and_config(
        board: Board,
        side_to_move: Color,
        rights: CastlingRights,
        config: RulesConfig,
    ) -> Self {
        GameState {
            board,
            history: Vec::new(),
            rights,
            side_to_move,
            fullmove: 1,
            engine: LegalityEngine::new(&config),
            parser: NotationParser::new(&config),
            config,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &[PlyRecord] {
        &self.history
    }

    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.rights
    }

    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove
    }

    #[must_use]
    pub const fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Validate a token against the current position without committing it.
    pub fn probe(&self, token: &str) -> Result<MoveDelta, GameError> {
        self.validate(token).map(|(_, delta)| delta)
    }

    /// Parse, validate and commit one move for the side to move.
    ///
    /// On any error the game is left exactly as it was.
    pub fn apply_move(&mut self, token: &str) -> Result<MoveSummary, GameError> {
        let (mv, delta) = self.validate(token)?;
        Ok(self.commit(mv, delta))
    }

    fn validate(&self, token: &str) -> Result<(Move, MoveDelta), GameError> {
        let result = self.parse_and_check(token);
        if let Err(err) = &result {
            log::trace!("rejected {token:?} for {}: {err}", self.side_to_move);
        }
        result
    }

    fn parse_and_check(&self, token: &str) -> Result<(Move, MoveDelta), GameError> {
        let mv = self.parser.parse(token, self.side_to_move)?;
        if self.config.strict_move_numbers && mv.number() != self.fullmove {
            return Err(GameError::MoveNumberMismatch {
                expected: self.fullmove,
                found: mv.number(),
            });
        }
        let delta = self
            .engine
            .is_legal(&mv, &self.board, self.rights, &self.history)?;
        Ok((mv, delta))
    }

    fn commit(&mut self, mv: Move, delta: MoveDelta) -> MoveSummary {
        self.board.apply_delta(&delta);

        let rights = delta.rights_after(self.rights);
        if rights != self.rights {
            log::debug!(
                "castling rights {:04b} -> {:04b} after {}",
                self.rights.as_u8(),
                rights.as_u8(),
                mv.notation()
            );
            self.rights = rights;
        }

        log::debug!(
            "committed {} ({} {}{})",
            mv.notation(),
            delta.piece(),
            delta.from(),
            delta.to()
        );

        let summary = MoveSummary {
            ply: self.history.len(),
            number: mv.number(),
            color: delta.color(),
            notation: mv.notation().to_string(),
            piece: delta.piece(),
            from: delta.from(),
            to: delta.to(),
            captured: delta.captured().map(|(_, piece)| piece),
            kind: delta.kind(),
            gives_check: delta.gives_check(),
        };

        if self.side_to_move == Color::Black {
            self.fullmove += 1;
        }
        self.side_to_move = self.side_to_move.opponent();
        self.history.push(PlyRecord { mv, delta });
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::error::IllegalMove;
    use crate::board::CastleSide;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameState::new();
        let first = game.apply_move("1.e4").unwrap();
        assert_eq!(first.ply, 0);
        assert_eq!(first.kind, MoveKind::DoubleStep);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.fullmove_number(), 1);

        game.apply_move("1...c5").unwrap();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.fullmove_number(), 2);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let mut game = GameState::new();
        game.apply_move("1.e4").unwrap();
        let before = game.board().snapshot();

        // d7 holds a black pawn.
        let err = game.apply_move("1...Nd7").unwrap_err();
        assert!(matches!(err, GameError::Illegal(IllegalMove::OccupancyMismatch { .. })));
        assert_eq!(game.board().snapshot(), before);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_probe_does_not_commit() {
        let game = GameState::new();
        let delta = game.probe("1.Nc3").unwrap();
        assert_eq!(delta.from(), sq("b1"));
        assert!(game.history().is_empty());
        assert_eq!(game.board().piece_at(sq("b1")), Some((Color::White, Piece::Knight)));
    }

    #[test]
    fn test_strict_move_numbers() {
        let config = RulesConfig {
            strict_move_numbers: true,
            ..RulesConfig::default()
        };
        let mut game = GameState::with_config(config);
        assert_eq!(
            game.apply_move("3.e4").unwrap_err(),
            GameError::MoveNumberMismatch {
                expected: 1,
                found: 3
            }
        );
        game.apply_move("1.e4").unwrap();
        game.apply_move("1...e5").unwrap();
        assert!(game.apply_move("2.d4").is_ok());
    }

    #[test]
    fn test_loose_move_numbers_by_default() {
        let mut game = GameState::new();
        assert!(game.apply_move("17.e4").is_ok());
    }

    #[test]
    fn test_king_move_clears_rights() {
        let board = Board::from_fen_placement("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        let mut game = GameState::with_position(board, Color::White, CastlingRights::all());
        game.apply_move("1.Kf1").unwrap();
        let rights = game.castling_rights();
        assert!(!rights.has(Color::White, CastleSide::King));
        assert!(!rights.has(Color::White, CastleSide::Queen));
        assert!(rights.has(Color::Black, CastleSide::Queen));
    }

    #[test]
    fn test_summary_reports_capture() {
        let board = Board::from_fen_placement("4k3/8/8/3p4/4P3/8/8/4K3").unwrap();
        let mut game = GameState::with_position(board, Color::White, CastlingRights::none());
        let summary = game.apply_move("1.exd5").unwrap();
        assert_eq!(summary.captured, Some(Piece::Pawn));
        assert_eq!(summary.notation, "1.exd5");
        assert_eq!(game.board().piece_at(sq("d5")), Some((Color::White, Piece::Pawn)));
        assert!(game.board().is_empty(sq("e4")));
    }
}

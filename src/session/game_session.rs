//! Explicit game-session state.
//!
//! `GameSession` holds everything a front end needs between inputs: the live
//! board, whose turn it is, the selected square, the move history and whether
//! the game has ended. The engine functions stay pure over explicit boards;
//! only this value is ever mutated, and only through a legality check.

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::{attackers_to_square, is_in_check, king_square};
use crate::move_generation::legal_move_generator::{is_checkmate, is_legal, legal_moves};
use crate::utils::pgn::write_pgn;

/// Terminal state. Stalemate is not an outcome: a side with no legal
/// move that is not in check is reported as an ordinary turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
}

/// What a square selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected(Square),
    Deselected,
    Moved(Move),
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    side_to_move: Color,
    selected: Option<Square>,
    history: Vec<Move>,
    initial_board: Board,
    initial_side: Color,
    outcome: Option<GameOutcome>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Standard start, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::new_game(), Color::Light)
    }

    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut session = Self {
            board,
            side_to_move,
            selected: None,
            history: Vec::new(),
            initial_board: board,
            initial_side: side_to_move,
            outcome: None,
        };
        session.refresh_outcome();
        session
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Color> {
        match self.outcome {
            Some(GameOutcome::Checkmate { winner }) => Some(winner),
            None => None,
        }
    }

    /// Click-style input for `player`: the first click on one of the
    /// player's pieces selects it, the second click on another square tries
    /// to move there. An illegal or repeated second click clears the
    /// selection.
    pub fn select_square(
        &mut self,
        square: Square,
        player: Color,
    ) -> Result<SelectionOutcome, ChessError> {
        self.ensure_can_move(player)?;
        if !square.is_on_board() {
            return Err(ChessError::InvalidCoordinate((square.row, square.col)));
        }

        if let Some(from) = self.selected.take() {
            if from != square && is_legal(&self.board, from, square, player) {
                let mv = Move::new(from, square);
                self.commit(mv);
                return Ok(SelectionOutcome::Moved(mv));
            }
            return Ok(SelectionOutcome::Deselected);
        }

        if self.board.is_color(square, player) {
            self.selected = Some(square);
            return Ok(SelectionOutcome::Selected(square));
        }

        Ok(SelectionOutcome::Ignored)
    }

    /// Play `mv` for `player` after checking turn, game state and legality.
    pub fn attempt_move(&mut self, mv: Move, player: Color) -> Result<(), ChessError> {
        self.ensure_can_move(player)?;
        if !is_legal(&self.board, mv.from, mv.to, player) {
            return Err(ChessError::IllegalMove(mv));
        }
        self.selected = None;
        self.commit(mv);
        Ok(())
    }

    /// Let `engine` move for the side to move. A `None` best move leaves the
    /// turn where it is.
    pub fn play_engine_turn(
        &mut self,
        engine: &mut dyn Engine,
    ) -> Result<EngineOutput, ChessError> {
        if self.is_terminal() {
            return Err(ChessError::GameIsOver);
        }

        let color = self.side_to_move;
        let output = engine.choose_move(&self.board, color);
        if let Some(mv) = output.best_move {
            if !is_legal(&self.board, mv.from, mv.to, color) {
                return Err(ChessError::IllegalMove(mv));
            }
            self.selected = None;
            self.commit(mv);
        }
        Ok(output)
    }

    /// Hand the move to the other side and re-evaluate the terminal state.
    pub fn advance_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.refresh_outcome();
    }

    /// Legal destinations for the piece on `from` owned by the side to move.
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        legal_moves(&self.board, self.side_to_move)
            .into_iter()
            .filter(|mv| mv.from == from)
            .map(|mv| mv.to)
            .collect()
    }

    /// Pieces currently giving check to the side to move.
    pub fn checkers(&self) -> Vec<(Square, PieceKind)> {
        king_square(&self.board, self.side_to_move)
            .map(|king| attackers_to_square(&self.board, king, self.side_to_move.opposite()))
            .unwrap_or_default()
    }

    pub fn status_text(&self) -> String {
        match self.outcome {
            Some(GameOutcome::Checkmate { winner }) => {
                format!("Checkmate! {} wins.", winner.name())
            }
            None if is_in_check(&self.board, self.side_to_move) => {
                format!("{} is in check!", self.side_to_move.name())
            }
            None => format!("{}'s turn", self.side_to_move.name()),
        }
    }

    /// PGN-style record of the game so far.
    pub fn to_pgn(&self) -> Result<String, ChessError> {
        let result = match self.winner() {
            Some(Color::Light) => "1-0",
            Some(Color::Dark) => "0-1",
            None => "*",
        };
        write_pgn(&self.initial_board, self.initial_side, &self.history, result)
    }

    fn ensure_can_move(&self, player: Color) -> Result<(), ChessError> {
        if self.is_terminal() {
            return Err(ChessError::GameIsOver);
        }
        if player != self.side_to_move {
            return Err(ChessError::NotPlayersTurn(player));
        }
        Ok(())
    }

    fn commit(&mut self, mv: Move) {
        make_move(&mut self.board, mv);
        self.history.push(mv);
        self.advance_turn();
    }

    fn refresh_outcome(&mut self) {
        self.outcome = [Color::Light, Color::Dark]
            .into_iter()
            .find(|color| is_checkmate(&self.board, *color))
            .map(|loser| GameOutcome::Checkmate {
                winner: loser.opposite(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::utils::fen_parser::parse_fen;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn new_session_starts_with_white() {
        let session = GameSession::new();
        assert_eq!(session.side_to_move(), Color::Light);
        assert!(!session.is_terminal());
        assert_eq!(session.status_text(), "White's turn");
    }

    #[test]
    fn two_clicks_make_a_move_and_pass_the_turn() {
        let mut session = GameSession::new();
        assert_eq!(
            session.select_square(sq(6, 4), Color::Light),
            Ok(SelectionOutcome::Selected(sq(6, 4)))
        );
        assert_eq!(
            session.select_square(sq(4, 4), Color::Light),
            Ok(SelectionOutcome::Moved(Move::new(sq(6, 4), sq(4, 4))))
        );
        assert_eq!(session.side_to_move(), Color::Dark);
        assert_eq!(session.selected(), None);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn illegal_second_click_clears_selection() {
        let mut session = GameSession::new();
        session
            .select_square(sq(6, 4), Color::Light)
            .expect("select should succeed");
        assert_eq!(
            session.select_square(sq(3, 4), Color::Light),
            Ok(SelectionOutcome::Deselected)
        );
        assert_eq!(session.side_to_move(), Color::Light);
        assert_eq!(
            session.select_square(sq(4, 4), Color::Light),
            Ok(SelectionOutcome::Ignored)
        );
    }

    #[test]
    fn input_is_rejected_on_the_wrong_turn() {
        let mut session = GameSession::new();
        assert_eq!(
            session.select_square(sq(1, 4), Color::Dark),
            Err(ChessError::NotPlayersTurn(Color::Dark))
        );
        let mv = Move::new(sq(1, 4), sq(3, 4));
        assert_eq!(
            session.attempt_move(mv, Color::Dark),
            Err(ChessError::NotPlayersTurn(Color::Dark))
        );
    }

    #[test]
    fn attempt_move_rejects_illegal_moves() {
        let mut session = GameSession::new();
        let mv = Move::new(sq(7, 0), sq(5, 0));
        assert_eq!(
            session.attempt_move(mv, Color::Light),
            Err(ChessError::IllegalMove(mv))
        );
        assert_eq!(session.history().len(), 0);
    }

    #[test]
    fn fools_mate_ends_the_session() {
        let mut session = GameSession::new();
        let moves = [
            (Color::Light, (6, 5), (5, 5)),
            (Color::Dark, (1, 4), (3, 4)),
            (Color::Light, (6, 6), (4, 6)),
            (Color::Dark, (0, 3), (4, 7)),
        ];
        for (color, from, to) in moves {
            session
                .attempt_move(Move::new(sq(from.0, from.1), sq(to.0, to.1)), color)
                .expect("scripted move should be legal");
        }

        assert!(session.is_terminal());
        assert_eq!(session.winner(), Some(Color::Dark));
        assert_eq!(session.status_text(), "Checkmate! Black wins.");
        assert_eq!(
            session.attempt_move(Move::new(sq(6, 0), sq(5, 0)), Color::Light),
            Err(ChessError::GameIsOver)
        );

        let mut engine = GreedyEngine::with_seed(0);
        assert!(matches!(
            session.play_engine_turn(&mut engine),
            Err(ChessError::GameIsOver)
        ));
    }

    #[test]
    fn engine_turn_moves_for_the_side_to_move() {
        let mut session = GameSession::new();
        session
            .attempt_move(Move::new(sq(6, 4), sq(4, 4)), Color::Light)
            .expect("e2e4 should be legal");

        let mut engine = GreedyEngine::with_seed(11);
        let out = session
            .play_engine_turn(&mut engine)
            .expect("engine turn should succeed");
        let mv = out.best_move.expect("black has moves");
        assert!(session.board().is_color(mv.to, Color::Dark));
        assert_eq!(session.side_to_move(), Color::Light);
    }

    #[test]
    fn stalemated_engine_side_keeps_the_turn() {
        let (board, side) = parse_fen("7k/5Q2/6K1/8/8/8/8/8 b").expect("test FEN should parse");
        let mut session = GameSession::from_board(board, side);
        assert!(!session.is_terminal());
        assert_eq!(session.status_text(), "Black's turn");

        let mut engine = GreedyEngine::with_seed(5);
        let out = session
            .play_engine_turn(&mut engine)
            .expect("engine turn should not error");
        assert_eq!(out.best_move, None);
        assert_eq!(session.side_to_move(), Color::Dark);
    }

    #[test]
    fn check_is_reported_in_status() {
        let (board, side) = parse_fen("4k3/8/8/8/8/8/8/4RK2 b").expect("test FEN should parse");
        let session = GameSession::from_board(board, side);
        assert_eq!(session.status_text(), "Black is in check!");
        assert_eq!(session.legal_targets(sq(0, 4)).len(), 4);
        assert_eq!(session.checkers(), vec![(sq(7, 4), PieceKind::Rook)]);
        assert!(GameSession::new().checkers().is_empty());
    }
}

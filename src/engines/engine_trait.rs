//! Engine abstraction used by the session, the play loop and the match
//! harness.
//!
//! Engines receive an explicit board and the color to move and return a
//! chosen move together with human-readable diagnostic lines.

use crate::game_state::chess_types::{Board, Color, Move};

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side has no legal move (checkmate or stalemate).
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board, color: Color) -> EngineOutput;
}

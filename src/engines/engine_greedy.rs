//! One-ply capture-preferring engine.
//!
//! Scores each legal move by the value of the piece it captures, adds a half
//! pawn if the reply position leaves the opponent in check, and picks
//! uniformly among the best-scoring moves.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_rules::{piece_value, CHECK_BONUS};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

pub struct GreedyEngine {
    move_generator: FastLegalMoveGenerator,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Reproducible tie-breaking.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: FastLegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Capture value plus the check bonus, in centipawns.
    #[inline]
    pub fn score_move(mv: &GeneratedMove) -> i32 {
        let capture_value = mv.captured_piece.map_or(0, |piece| piece_value(piece.kind));
        if mv.annotations.gives_check {
            capture_value + CHECK_BONUS
        } else {
            capture_value
        }
    }

    /// The maximal-score candidate set and its score.
    pub fn best_candidates(&self, board: &Board, color: Color) -> (i32, Vec<Move>) {
        let legal_moves = self.move_generator.generate_legal_moves(board, color);
        Self::best_of(&legal_moves, color)
    }

    fn best_of(legal_moves: &[GeneratedMove], color: Color) -> (i32, Vec<Move>) {
        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();

        for mv in legal_moves {
            if let Some(value) = Self::candidate_score(mv, color) {
                Self::track_best(&mut best_value, &mut best_moves, value, mv.mv);
            }
        }

        (best_value, best_moves)
    }

    fn candidate_score(mv: &GeneratedMove, color: Color) -> Option<i32> {
        // Generation already filters self-check; kept as a guard on the
        // simulated position.
        if is_in_check(&mv.board_after, color) {
            return None;
        }
        Some(Self::score_move(mv))
    }

    fn track_best(best_value: &mut i32, best_moves: &mut Vec<Move>, value: i32, mv: Move) {
        if value > *best_value {
            *best_value = value;
            best_moves.clear();
            best_moves.push(mv);
        } else if value == *best_value {
            best_moves.push(mv);
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Mailbox Greedy"
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> EngineOutput {
        let legal_moves = self.move_generator.generate_legal_moves(board, color);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));

        let (best_value, best_moves) = Self::best_of(&legal_moves, color);

        let Some(picked) = best_moves.as_slice().choose(&mut self.rng) else {
            out.info_lines.push("info string greedy_engine no_move_available".to_owned());
            return out;
        };

        out.info_lines.push(format!(
            "info string greedy_engine best_score {} tied {}",
            best_value,
            best_moves.len()
        ));
        out.best_move = Some(*picked);
        out
    }
}

//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through a
//! `GameSession`, with an optional seeded random opening prefix.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::session::game_session::GameSession;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    /// The side to move had no legal move while not in check.
    NoMoveAvailable(Color),
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub seed: u64,
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 0,
            opening_max_plies: 0,
            seed: 0,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_session: GameSession,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
}

/// Play a single seeded engine-vs-engine match.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, ChessError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut session = GameSession::new();
    engine_white.new_game();
    engine_black.new_game();

    let opening_plies = if config.opening_max_plies > config.opening_min_plies {
        rng.random_range(config.opening_min_plies..=config.opening_max_plies)
    } else {
        config.opening_min_plies
    };

    let mut opening_moves_lan = Vec::new();
    for _ in 0..opening_plies {
        if session.is_terminal() {
            break;
        }
        let side = session.side_to_move();
        let candidates = legal_moves(session.board(), side);
        let Some(mv) = candidates.as_slice().choose(&mut rng).copied() else {
            break;
        };
        session.attempt_move(mv, side)?;
        opening_moves_lan.push(move_to_long_algebraic(mv)?);
    }

    let mut played_moves_lan = Vec::new();
    let outcome = loop {
        if let Some(winner) = session.winner() {
            break match winner {
                Color::Light => MatchOutcome::WhiteWinCheckmate,
                Color::Dark => MatchOutcome::BlackWinCheckmate,
            };
        }
        if session.history().len() >= usize::from(config.max_plies) {
            break MatchOutcome::MaxPlies;
        }

        let side = session.side_to_move();
        let engine: &mut dyn Engine = match side {
            Color::Light => &mut *engine_white,
            Color::Dark => &mut *engine_black,
        };
        let output = session.play_engine_turn(engine)?;

        let Some(mv) = output.best_move else {
            break MatchOutcome::NoMoveAvailable(side);
        };
        let lan = move_to_long_algebraic(mv)?;
        if config.verbose {
            println!(
                "ply {:>3} {:<5} {} | {}",
                session.history().len(),
                side.name(),
                lan,
                output.info_lines.join(" | ")
            );
        }
        played_moves_lan.push(lan);
    };

    if config.verbose {
        println!("outcome: {outcome:?} after {} plies", session.history().len());
    }

    Ok(MatchResult {
        outcome,
        final_session: session,
        opening_moves_lan,
        played_moves_lan,
    })
}

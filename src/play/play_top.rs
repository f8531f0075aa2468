//! Terminal play front-end and command loop.
//!
//! Translates typed commands into `GameSession` operations for a human side
//! and lets the greedy engine answer for the other side after a short pause.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::chess_errors::ChessError;
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;
use crate::session::game_session::{GameSession, SelectionOutcome};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use crate::utils::render_game_state::render_board_with_selection;

const HELP_TEXT: &str = "commands: board | select <sq> | move <e2e4> | <e2e4> | moves [sq] | status | new | pgn | debug on|off | quit";

#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub human_color: Color,
    /// Pause before the engine replies, purely for pacing.
    pub engine_delay_ms: u64,
    pub seed: Option<u64>,
    pub show_board: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_color: Color::Light,
            engine_delay_ms: 500,
            seed: None,
            show_board: true,
        }
    }
}

impl PlayConfig {
    /// Read `--black`, `--quiet`, `--seed N` and `--delay-ms N`.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--black" => config.human_color = Color::Dark,
                "--quiet" => config.show_board = false,
                "--seed" => {
                    let value = args.next().ok_or("--seed needs a value")?;
                    config.seed = Some(
                        value
                            .parse::<u64>()
                            .map_err(|_| format!("invalid --seed value: {value}"))?,
                    );
                }
                "--delay-ms" => {
                    let value = args.next().ok_or("--delay-ms needs a value")?;
                    config.engine_delay_ms = value
                        .parse::<u64>()
                        .map_err(|_| format!("invalid --delay-ms value: {value}"))?;
                }
                other => return Err(format!("unknown argument: {other}")),
            }
        }

        Ok(config)
    }
}

pub fn run_stdio_loop(config: PlayConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut play = PlayState::new(config);

    play.start(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = play.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct PlayState {
    config: PlayConfig,
    session: GameSession,
    engine: Box<dyn Engine>,
    debug_mode: bool,
}

impl PlayState {
    fn new(config: PlayConfig) -> Self {
        let engine: Box<dyn Engine> = match config.seed {
            Some(seed) => Box::new(GreedyEngine::with_seed(seed)),
            None => Box::new(GreedyEngine::new()),
        };
        Self {
            config,
            session: GameSession::new(),
            engine,
            debug_mode: false,
        }
    }

    fn start(&mut self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{HELP_TEXT}")?;
        self.engine_reply_if_needed(out)?;
        self.show(out)
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next();

        match (cmd, arg) {
            ("quit" | "exit", _) => return Ok(true),
            ("help", _) => writeln!(out, "{HELP_TEXT}")?,
            ("board", _) => self.show(out)?,
            ("status", _) => writeln!(out, "{}", self.session.status_text())?,
            ("new", _) => {
                self.session = GameSession::new();
                self.engine.new_game();
                self.engine_reply_if_needed(out)?;
                self.show(out)?;
            }
            ("pgn", _) => match self.session.to_pgn() {
                Ok(pgn) => write!(out, "{pgn}")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            ("debug", Some(mode)) => self.debug_mode = mode == "on",
            ("moves", square) => self.list_moves(square, out)?,
            ("select", Some(square)) => self.handle_select(square, out)?,
            ("move", Some(text)) => self.handle_move(text, out)?,
            (text, None) if text.len() >= 4 => self.handle_move(text, out)?,
            _ => writeln!(out, "unknown command: {trimmed}")?,
        }

        Ok(false)
    }

    fn handle_select(&mut self, square_text: &str, out: &mut impl Write) -> io::Result<()> {
        let result = algebraic_to_square(square_text)
            .and_then(|square| self.session.select_square(square, self.config.human_color));

        match result {
            Ok(SelectionOutcome::Moved(_)) => self.after_human_move(out),
            Ok(SelectionOutcome::Selected(_)) => self.show(out),
            Ok(SelectionOutcome::Deselected) => writeln!(out, "selection cleared"),
            Ok(SelectionOutcome::Ignored) => {
                writeln!(out, "no {} piece there", self.config.human_color.name())
            }
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    fn handle_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let result = long_algebraic_to_move(text)
            .and_then(|mv| self.session.attempt_move(mv, self.config.human_color));

        match result {
            Ok(()) => self.after_human_move(out),
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    fn after_human_move(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.engine_reply_if_needed(out)?;
        self.show(out)
    }

    fn engine_reply_if_needed(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.session.is_terminal() || self.session.side_to_move() == self.config.human_color {
            return Ok(());
        }

        if self.config.engine_delay_ms > 0 {
            thread::sleep(Duration::from_millis(self.config.engine_delay_ms));
        }

        match self.session.play_engine_turn(self.engine.as_mut()) {
            Ok(output) => {
                if self.debug_mode {
                    for line in &output.info_lines {
                        writeln!(out, "{line}")?;
                    }
                }
                match output.best_move.map(move_to_long_algebraic) {
                    Some(Ok(text)) => writeln!(out, "{} plays {text}", self.engine.name())?,
                    Some(Err(err)) => writeln!(out, "error: {err}")?,
                    None => writeln!(out, "{} has no move", self.engine.name())?,
                }
            }
            Err(err) => writeln!(out, "error: {err}")?,
        }
        Ok(())
    }

    fn list_moves(&self, square: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let from = match square.map(algebraic_to_square).transpose() {
            Ok(from) => from,
            Err(err) => return writeln!(out, "error: {err}"),
        };
        let Some(from) = from.or(self.session.selected()) else {
            return writeln!(out, "error: {}", ChessError::NoPieceSelected);
        };

        let targets: Vec<String> = self
            .session
            .legal_targets(from)
            .into_iter()
            .filter_map(|sq| square_to_algebraic(sq).ok())
            .collect();
        writeln!(out, "{}", targets.join(" "))
    }

    fn show(&self, out: &mut impl Write) -> io::Result<()> {
        if self.config.show_board {
            writeln!(
                out,
                "{}",
                render_board_with_selection(self.session.board(), self.session.selected())
            )?;
        }
        writeln!(out, "{}", self.session.status_text())?;

        if self.debug_mode {
            let checkers: Vec<String> = self
                .session
                .checkers()
                .into_iter()
                .filter_map(|(sq, kind)| {
                    square_to_algebraic(sq).ok().map(|name| format!("{kind:?}@{name}"))
                })
                .collect();
            if !checkers.is_empty() {
                writeln!(out, "info string checkers {}", checkers.join(" "))?;
            }
        }
        Ok(())
    }
}

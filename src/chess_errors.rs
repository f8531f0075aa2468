//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type for the fallible edges of the crate:
//! text parsing, the guarded move executor and session input handling.
//! Legality queries never produce one; they answer `false` instead.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Move};

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A coordinate outside `0..=7` reached an operation that indexes the board.
    ///
    /// Payload: (row, col).
    InvalidCoordinate((u8, u8)),

    /// A square or move string failed to parse.
    ///
    /// Payload: the original string.
    InvalidAlgebraicString(String),

    /// A FEN string had malformed structure or an unknown token.
    InvalidFen(String),

    /// The requested move is not legal for the side to move.
    IllegalMove(Move),

    /// Input arrived for a side whose turn it is not.
    NotPlayersTurn(Color),

    /// The session already reached checkmate.
    GameIsOver,

    /// A move was attempted without a selected source square.
    NoPieceSelected,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidCoordinate((row, col)) => {
                write!(f, "coordinate ({row}, {col}) is off the board")
            }
            ChessError::InvalidAlgebraicString(s) => write!(f, "invalid algebraic string: {s}"),
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::IllegalMove(mv) => write!(
                f,
                "illegal move ({}, {}) -> ({}, {})",
                mv.from.row, mv.from.col, mv.to.row, mv.to.col
            ),
            ChessError::NotPlayersTurn(color) => write!(f, "it is not {}'s turn", color.name()),
            ChessError::GameIsOver => write!(f, "the game is over"),
            ChessError::NoPieceSelected => write!(f, "no piece selected"),
        }
    }
}

impl Error for ChessError {}

//! Mailbox board representation.
//!
//! `Board` is the central model for the engine: a fixed 8x8 grid of optional
//! pieces. It is a plain `Copy` value, so a simulation copy costs 64 bytes and
//! never shares storage with the board it came from.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::{BACK_RANK, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// 8x8 grid indexed `[row][col]`, row 0 being rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    pub squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting arrangement. White (Light) moves first.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::Dark, *kind));
            board.squares[1][col] = Some(Piece::new(Color::Dark, PieceKind::Pawn));
            board.squares[6][col] = Some(Piece::new(Color::Light, PieceKind::Pawn));
            board.squares[7][col] = Some(Piece::new(Color::Light, *kind));
        }
        board
    }

    /// Parse the board field (and optional side field) of a FEN string.
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen).map(|(board, _)| board)
    }

    #[inline]
    pub fn get_fen(&self, side_to_move: Color) -> String {
        generate_fen(self, side_to_move)
    }

    /// Piece on `square`, or `None` when empty or off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize]
    }

    /// Overwrite `square`. Callers must pass an on-board coordinate.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// True when `square` holds a piece of `color`.
    #[inline]
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        matches!(self.piece_at(square), Some(piece) if piece.color == color)
    }

    /// Occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }
}

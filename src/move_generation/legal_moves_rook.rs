//! Rook movement geometry.
//!
//! Any distance along a row or column with nothing in between.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{clear_path, is_straight_line};

#[inline]
pub fn is_rook_move(board: &Board, from: Square, to: Square) -> bool {
    is_straight_line(from, to) && clear_path(board, from, to)
}

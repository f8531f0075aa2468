//! Queen movement geometry: the union of rook and bishop lines.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::is_bishop_move;
use crate::move_generation::legal_moves_rook::is_rook_move;

#[inline]
pub fn is_queen_move(board: &Board, from: Square, to: Square) -> bool {
    is_rook_move(board, from, to) || is_bishop_move(board, from, to)
}

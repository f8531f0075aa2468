use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::deltas;

/// (2,1) or (1,2) jump. Never obstructed.
#[inline]
pub fn is_knight_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

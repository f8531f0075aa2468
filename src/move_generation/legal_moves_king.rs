//! King movement geometry.
//!
//! One step in any direction. Must not consult check detection: this predicate
//! is itself used to decide whether an opposing king attacks a square. Moving
//! into check is rejected by the generator's self-check filter.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::deltas;

#[inline]
pub fn is_king_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row.abs().max(d_col.abs()) == 1
}

//! Pawn movement geometry.
//!
//! Single push onto an empty square, double push from the home row through
//! two empty squares, and a forward-diagonal step that must capture.

use crate::game_state::chess_rules::pawn_home_row;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::deltas;

pub fn is_pawn_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let forward = color.forward();

    if d_col == 0 {
        if d_row == forward {
            return board.is_empty(to);
        }
        if d_row == 2 * forward && from.row == pawn_home_row(color) {
            let Some(middle) = from.offset(forward, 0) else {
                return false;
            };
            return board.is_empty(middle) && board.is_empty(to);
        }
        return false;
    }

    d_col.abs() == 1 && d_row == forward && board.is_color(to, color.opposite())
}

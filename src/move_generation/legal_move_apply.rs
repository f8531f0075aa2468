//! Move execution.
//!
//! `make_move` / `unmake_move` mutate one board in place and are what the
//! generator uses for its self-check probes. `apply_move` is the copying
//! form handed to callers that want a fresh board value.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;

/// Apply `mv` to a copy of `board`. No legality check is performed; only
/// off-board coordinates are rejected.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, ChessError> {
    for square in [mv.from, mv.to] {
        if !square.is_on_board() {
            return Err(ChessError::InvalidCoordinate((square.row, square.col)));
        }
    }

    let mut next = *board;
    make_move(&mut next, mv);
    Ok(next)
}

/// Relocate the piece on `mv.from` to `mv.to`, promoting a pawn that reaches
/// its last row to a queen.
///
/// # Panics
///
/// Panics if either square is off the board. Use [`apply_move`] for
/// unchecked input.
pub fn make_move(board: &mut Board, mv: Move) -> UndoState {
    let moved_piece = board.piece_at(mv.from);
    let captured_piece = board.piece_at(mv.to);

    let promoted = matches!(
        moved_piece,
        Some(Piece { kind: PieceKind::Pawn, color }) if mv.to.row == promotion_row(color)
    );
    let placed = if promoted {
        moved_piece.map(|piece| Piece::new(piece.color, PieceKind::Queen))
    } else {
        moved_piece
    };

    board.set(mv.to, placed);
    board.set(mv.from, None);

    UndoState {
        mv,
        moved_piece,
        captured_piece,
        promoted,
    }
}

/// Restore the board exactly as it was before the matching `make_move`.
pub fn unmake_move(board: &mut Board, undo: &UndoState) {
    board.set(undo.mv.from, undo.moved_piece);
    board.set(undo.mv.to, undo.captured_piece);
}

//! Full legal move generation pipeline.
//!
//! Geometry (`is_pseudo_legal`) is probed exhaustively over every
//! source/destination pair; surviving candidates are played on a scratch
//! board and dropped if they leave the mover's own king in check. The
//! self-check filter is applied the same way to every piece kind.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::{is_in_check, leaves_king_in_check};
use crate::move_generation::legal_moves_bishop::is_bishop_move;
use crate::move_generation::legal_moves_king::is_king_move;
use crate::move_generation::legal_moves_knight::is_knight_move;
use crate::move_generation::legal_moves_pawn::is_pawn_move;
use crate::move_generation::legal_moves_queen::is_queen_move;
use crate::move_generation::legal_moves_rook::is_rook_move;
use crate::move_generation::move_generator::{GeneratedMove, MoveAnnotations, MoveGenerator};

pub struct LegalMoveGenerator;
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<GeneratedMove> {
        generate_legal_moves_internal(board, color, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<GeneratedMove> {
        generate_legal_moves_internal(board, color, false)
    }
}

/// Piece-movement geometry only: ownership, no friendly capture, and the
/// per-kind pattern with path obstruction. Off-board input answers `false`.
pub fn is_pseudo_legal(board: &Board, from: Square, to: Square, color: Color) -> bool {
    if from == to || !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if piece.color != color || board.is_color(to, color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => is_pawn_move(board, from, to, color),
        PieceKind::Knight => is_knight_move(from, to),
        PieceKind::Bishop => is_bishop_move(board, from, to),
        PieceKind::Rook => is_rook_move(board, from, to),
        PieceKind::Queen => is_queen_move(board, from, to),
        PieceKind::King => is_king_move(from, to),
    }
}

/// Full legality: geometry plus "does not leave own king in check".
pub fn is_legal(board: &Board, from: Square, to: Square, color: Color) -> bool {
    if !is_pseudo_legal(board, from, to, color) {
        return false;
    }
    let mut scratch = *board;
    !leaves_king_in_check(&mut scratch, Move::new(from, to), color)
}

/// All legal moves for `color`: row-major over sources, then destinations.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut scratch = *board;
    let mut out = Vec::<Move>::with_capacity(64);

    for (from, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        for to in Square::all() {
            if !is_pseudo_legal(board, from, to, color) {
                continue;
            }
            let mv = Move::new(from, to);
            if !leaves_king_in_check(&mut scratch, mv, color) {
                out.push(mv);
            }
        }
    }

    out
}

/// Short-circuiting form of `!legal_moves(board, color).is_empty()`.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    let mut scratch = *board;
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .any(|(from, _)| {
            Square::all().any(|to| {
                is_pseudo_legal(board, from, to, color)
                    && !leaves_king_in_check(&mut scratch, Move::new(from, to), color)
            })
        })
}

/// In check with no legal reply. Stalemate is not reported here.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_legal_move(board, color)
}

fn generate_legal_moves_internal(
    board: &Board,
    color: Color,
    annotate: bool,
) -> Vec<GeneratedMove> {
    let moves = legal_moves(board, color);
    let mut out = Vec::<GeneratedMove>::with_capacity(moves.len());
    let mut next = *board;

    for mv in moves {
        let undo = make_move(&mut next, mv);
        let Some(moved_piece) = undo.moved_piece else {
            unmake_move(&mut next, &undo);
            continue;
        };

        let gives_check = is_in_check(&next, color.opposite());
        let annotations = MoveAnnotations {
            gives_check,
            is_promotion: undo.promoted,
            is_checkmate: annotate && gives_check && !has_legal_move(&next, color.opposite()),
        };

        out.push(GeneratedMove {
            mv,
            moved_piece,
            captured_piece: undo.captured_piece,
            board_after: next,
            annotations,
        });
        unmake_move(&mut next, &undo);
    }

    out
}

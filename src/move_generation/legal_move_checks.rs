//! Check detection.
//!
//! A king is in check when some opposing piece's movement geometry reaches
//! its square. Geometry never consults check state, so there is no recursion
//! when the attacker is itself a king.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::is_pseudo_legal;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    let king = Piece::new(color, PieceKind::King);
    board
        .pieces()
        .find(|(_, piece)| *piece == king)
        .map(|(square, _)| square)
}

/// True when `color`'s king is attacked. A board without that king reports
/// `false`.
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// True when a piece of `attacker_color` could move onto `square`.
///
/// Pawns only count when `square` is occupied by the other side, matching
/// their capture rule; the king squares this is asked about always are.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == attacker_color)
        .any(|(from, _)| is_pseudo_legal(board, from, square, attacker_color))
}

pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    board
        .pieces()
        .filter(|(from, piece)| {
            piece.color == attacker_color && is_pseudo_legal(board, *from, square, attacker_color)
        })
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

/// Would playing `mv` leave `color`'s own king in check?
///
/// Works on `scratch` with a make/unmake pair and leaves it unchanged.
#[inline]
pub fn leaves_king_in_check(scratch: &mut Board, mv: Move, color: Color) -> bool {
    let undo = make_move(scratch, mv);
    let in_check = is_in_check(scratch, color);
    unmake_move(scratch, &undo);
    in_check
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn place(board: &mut Board, square: Square, color: Color, kind: PieceKind) {
        board.set(square, Some(Piece::new(color, kind)));
    }

    #[test]
    fn rook_on_open_file_checks_until_blocked() {
        let mut board = Board::new_empty();
        place(&mut board, sq(7, 4), Color::Light, PieceKind::King);
        place(&mut board, sq(0, 4), Color::Dark, PieceKind::Rook);
        place(&mut board, sq(0, 0), Color::Dark, PieceKind::King);
        assert!(is_in_check(&board, Color::Light));
        assert!(!is_in_check(&board, Color::Dark));

        place(&mut board, sq(4, 4), Color::Light, PieceKind::Bishop);
        assert!(!is_in_check(&board, Color::Light));
    }

    #[test]
    fn pawn_checks_diagonally_forward_only() {
        let mut board = Board::new_empty();
        place(&mut board, sq(4, 4), Color::Light, PieceKind::King);
        place(&mut board, sq(3, 3), Color::Dark, PieceKind::Pawn);
        assert!(is_in_check(&board, Color::Light));

        let mut behind = Board::new_empty();
        place(&mut behind, sq(4, 4), Color::Light, PieceKind::King);
        place(&mut behind, sq(5, 3), Color::Dark, PieceKind::Pawn);
        assert!(!is_in_check(&behind, Color::Light));

        let mut straight = Board::new_empty();
        place(&mut straight, sq(4, 4), Color::Light, PieceKind::King);
        place(&mut straight, sq(3, 4), Color::Dark, PieceKind::Pawn);
        assert!(!is_in_check(&straight, Color::Light));
    }

    #[test]
    fn knight_check_ignores_blockers() {
        let mut board = Board::new_game();
        board.set(sq(5, 5), Some(Piece::new(Color::Dark, PieceKind::Knight)));
        // Knight on f3 attacks the king on e1 over the pawn wall.
        assert!(is_in_check(&board, Color::Light));
    }

    #[test]
    fn adjacent_kings_attack_each_other() {
        let mut board = Board::new_empty();
        place(&mut board, sq(4, 4), Color::Light, PieceKind::King);
        place(&mut board, sq(3, 4), Color::Dark, PieceKind::King);
        assert!(is_in_check(&board, Color::Light));
        assert!(is_in_check(&board, Color::Dark));
        assert_eq!(
            attackers_to_square(&board, sq(4, 4), Color::Dark),
            vec![(sq(3, 4), PieceKind::King)]
        );
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = Board::new_empty();
        assert!(!is_in_check(&board, Color::Light));
        assert_eq!(king_square(&board, Color::Dark), None);
    }

    #[test]
    fn start_position_has_no_check() {
        let board = Board::new_game();
        assert!(!is_in_check(&board, Color::Light));
        assert!(!is_in_check(&board, Color::Dark));
    }

    #[test]
    fn leaves_king_in_check_restores_scratch() {
        let mut board = Board::new_empty();
        place(&mut board, sq(7, 4), Color::Light, PieceKind::King);
        place(&mut board, sq(6, 4), Color::Light, PieceKind::Rook);
        place(&mut board, sq(0, 4), Color::Dark, PieceKind::Rook);
        let before = board;

        assert!(leaves_king_in_check(&mut board, Move::new(sq(6, 4), sq(6, 0)), Color::Light));
        assert!(!leaves_king_in_check(&mut board, Move::new(sq(6, 4), sq(3, 4)), Color::Light));
        assert_eq!(board, before);
    }
}

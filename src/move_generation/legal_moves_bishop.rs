use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{clear_path, is_diagonal_line};

#[inline]
pub fn is_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    is_diagonal_line(from, to) && clear_path(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::is_bishop_move;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_moves_on_open_diagonals_only() {
        let board = Board::new_game();
        let from = Square::new(7, 2);
        assert!(!is_bishop_move(&board, from, Square::new(5, 4)));
        assert!(!is_bishop_move(&board, from, Square::new(6, 2)));

        let mut open = Board::new_empty();
        open.set(from, Some(Piece::new(Color::Light, PieceKind::Bishop)));
        assert!(is_bishop_move(&open, from, Square::new(2, 7)));
        assert!(is_bishop_move(&open, from, Square::new(5, 0)));
        assert!(!is_bishop_move(&open, from, Square::new(5, 3)));
    }
}

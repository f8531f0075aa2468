use crate::game_state::chess_types::*;

/// Signed (row, col) delta from `from` to `to`.
#[inline]
pub fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row as i8 - from.row as i8,
        to.col as i8 - from.col as i8,
    )
}

/// True when `from` and `to` share a row or a column.
#[inline]
pub fn is_straight_line(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row == 0 || d_col == 0
}

/// True when `from` and `to` lie on a common diagonal.
#[inline]
pub fn is_diagonal_line(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row.abs() == d_col.abs()
}

/// Every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares on a common line; adjacent squares pass.
pub fn clear_path(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let steps = d_row.abs().max(d_col.abs());
    let step_row = d_row.signum();
    let step_col = d_col.signum();

    (1..steps).all(|i| {
        from.offset(step_row * i, step_col * i)
            .is_some_and(|sq| board.is_empty(sq))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_path_sees_blockers_only_between_endpoints() {
        let mut board = Board::new_empty();
        let from = Square::new(7, 0);
        let to = Square::new(0, 0);
        assert!(clear_path(&board, from, to));

        board.set(to, Some(Piece::new(Color::Dark, PieceKind::Rook)));
        assert!(clear_path(&board, from, to));

        board.set(Square::new(3, 0), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert!(!clear_path(&board, from, to));
        assert!(clear_path(&board, from, Square::new(6, 0)));
    }

    #[test]
    fn diagonal_path_checks_intermediate_squares() {
        let mut board = Board::new_empty();
        let from = Square::new(7, 2);
        let to = Square::new(4, 5);
        assert!(is_diagonal_line(from, to));
        assert!(clear_path(&board, from, to));

        board.set(Square::new(5, 4), Some(Piece::new(Color::Dark, PieceKind::Knight)));
        assert!(!clear_path(&board, from, to));
    }
}

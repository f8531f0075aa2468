//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! `(row, col)` squares. Row 0 is rank 8, so `a8 == (0, 0)` and
//! `h1 == (7, 7)`.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessError> {
    if !square.is_on_board() {
        return Err(ChessError::InvalidCoordinate((square.row, square.col)));
    }

    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'8' - square.row);

    Ok(format!("{file_char}{rank_char}"))
}

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// `Move` to coordinate text such as `e2e4`. Promotion is always to a
/// queen and is implied, so no suffix is written.
pub fn move_to_long_algebraic(mv: Move) -> Result<String, ChessError> {
    let mut out = square_to_algebraic(mv.from)?;
    out.push_str(&square_to_algebraic(mv.to)?);
    Ok(out)
}

/// Parse `e2e4`. A trailing `q` promotion suffix is accepted; any other
/// suffix is rejected since pawns only promote to queens.
pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<Move, ChessError> {
    let text = long_algebraic.trim();
    let invalid = || ChessError::InvalidAlgebraicString(long_algebraic.to_owned());

    match text.len() {
        4 => {}
        5 if text.ends_with(['q', 'Q']) => {}
        _ => return Err(invalid()),
    }
    if !text.is_ascii() {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    Ok(Move::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;

    #[test]
    fn parses_and_formats_coordinate_moves() {
        let mv = long_algebraic_to_move("e2e4").expect("e2e4 should parse");
        assert_eq!(mv, Move::new(Square::new(6, 4), Square::new(4, 4)));
        assert_eq!(move_to_long_algebraic(mv).expect("should format"), "e2e4");

        let promo = long_algebraic_to_move("a7a8q").expect("a7a8q should parse");
        assert_eq!(promo.to, Square::new(0, 0));
    }

    #[test]
    fn rejects_bad_move_text() {
        for bad in ["", "e2", "e2e9", "a7a8n", "e2-e4", "é2e4"] {
            assert!(long_algebraic_to_move(bad).is_err(), "{bad} should not parse");
        }
    }
}

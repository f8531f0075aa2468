//! FEN-to-Board parser.
//!
//! Reads the piece-placement field and the optional side-to-move field.
//! Castling, en-passant and clock fields are accepted for compatibility with
//! full FEN strings but ignored, since the rule set has none of them.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> Result<(Board, Color), ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side_to_move = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::Light,
    };

    if parts.count() > 4 {
        return Err(ChessError::InvalidFen("FEN has extra trailing fields".to_owned()));
    }

    let mut board = Board::new_empty();
    parse_board(board_part, &mut board)?;

    Ok((board, side_to_move))
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}' in board layout"))
            })?;

            if col >= 8 {
                return Err(ChessError::InvalidFen("board rank has too many files".to_owned()));
            }

            board.squares[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFen(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

//! PGN-style game record writer.
//!
//! Serializes move history and headers to PGN text. Movetext uses coordinate
//! notation (`e2e4`) since the game record is meant for replay by this
//! engine, not for SAN-aware tools.

use std::collections::BTreeMap;

use chrono::Local;

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::is_legal;
use crate::utils::fen_generator::generate_fen;
use crate::utils::long_algebraic::move_to_long_algebraic;

pub fn write_pgn(
    initial_board: &Board,
    initial_side: Color,
    move_history: &[Move],
    result: &str,
) -> Result<String, ChessError> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Mailbox Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial_fen = generate_fen(initial_board, initial_side);
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(initial_board, initial_side, move_history, &headers)
}

/// Each move is replayed and must be legal for the side to move.
pub fn write_pgn_with_headers(
    initial_board: &Board,
    initial_side: Color,
    move_history: &[Move],
    headers: &BTreeMap<String, String>,
) -> Result<String, ChessError> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut board = *initial_board;
    let mut side = initial_side;
    // A game set up with Dark to move starts at "1...".
    let ply_offset = usize::from(initial_side == Color::Dark);
    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);

    for (index, mv) in move_history.iter().enumerate() {
        if !is_legal(&board, mv.from, mv.to, side) {
            return Err(ChessError::IllegalMove(*mv));
        }

        let ply = index + ply_offset;
        let text = move_to_long_algebraic(*mv)?;
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, text));
        } else if index == 0 {
            movetext_parts.push(format!("{}... {}", (ply / 2) + 1, text));
        } else {
            movetext_parts.push(text);
        }

        board = apply_move(&board, *mv)?;
        side = side.opposite();
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

fn normalize_result(result: &str) -> &'static str {
    match result.trim() {
        "1-0" => "1-0",
        "0-1" => "0-1",
        "1/2-1/2" => "1/2-1/2",
        _ => "*",
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

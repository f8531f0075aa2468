//! Canonical chess-rule constants.
//!
//! Starting arrangement, home/promotion rows and the material values the
//! automated opponent scores captures with.

use crate::game_state::chess_types::{Color, PieceKind};

/// Standard starting placement in Forsyth-Edwards Notation (board and side
/// fields only; castling and en-passant are not part of this rule set).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Back-rank order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Row a pawn of `color` starts on and may double-step from.
#[inline]
pub const fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// Capture value in centipawns (king 1000, queen 9, rook 5, minor 3, pawn 1).
#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 100_000,
    }
}

/// Half-pawn bonus for a move that leaves the opponent in check.
pub const CHECK_BONUS: i32 = 50;

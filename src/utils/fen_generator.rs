use crate::game_state::chess_types::*;

/// Board and side-to-move fields of a FEN string.
pub fn generate_fen(board: &Board, side_to_move: Color) -> String {
    let side = match side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    format!("{} {}", generate_board_field(board), side)
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, rank) in board.squares.iter().enumerate() {
        let mut empty_count = 0u8;

        for square in rank {
            if let Some(piece) = square {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(*piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn record_leaf(&mut self, mv: &GeneratedMove) {
        self.nodes += 1;
        if mv.captured_piece.is_some() {
            self.captures += 1;
        }
        if mv.annotations.is_promotion {
            self.promotions += 1;
        }
        if mv.annotations.gives_check {
            self.checks += 1;
        }
        if mv.annotations.is_checkmate {
            self.checkmates += 1;
        }
    }
}

/// Perft with the annotated legal generator.
pub fn perft_legal(board: &Board, color: Color, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, board, color, depth)
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    color: Color,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, color) {
        perft_recurse(generator, &mv, color.opposite(), depth, 1, &mut total);
    }
    total
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    side_to_move: Color,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.record_leaf(mv);
        return;
    }

    for child in generator.generate_legal_moves(&mv.board_after, side_to_move) {
        perft_recurse(
            generator,
            &child,
            side_to_move.opposite(),
            search_depth,
            current_depth + 1,
            counts,
        );
    }
}

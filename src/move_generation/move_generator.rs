use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_promotion: bool,
    pub is_checkmate: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub board_after: Board,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<GeneratedMove>;
}

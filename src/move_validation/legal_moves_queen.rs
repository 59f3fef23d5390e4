use crate::game_state::chess_types::*;
use crate::move_validation::legal_moves_bishop::bishop_shape_is_legal;
use crate::move_validation::legal_moves_rook::rook_shape_is_legal;

/// Queen shape: rook or bishop shape.
pub fn queen_shape_is_legal(board: &Board, mv: Move) -> bool {
    rook_shape_is_legal(board, mv) || bishop_shape_is_legal(board, mv)
}

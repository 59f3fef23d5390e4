use crate::game_state::chess_types::*;
use crate::move_validation::legal_move_shared::{is_straight, path_is_clear};

/// Rook shape: along a rank or file with nothing in between.
pub fn rook_shape_is_legal(board: &Board, mv: Move) -> bool {
    is_straight(mv) && path_is_clear(board, mv)
}

#[cfg(test)]
mod tests {
    use super::rook_shape_is_legal;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_slides_until_blocked() {
        let position =
            Position::from_fen("4k3/8/8/8/R2p4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let board = &position.board;
        assert!(rook_shape_is_legal(board, Move::new(0, 3, 3, 3)));
        assert!(!rook_shape_is_legal(board, Move::new(0, 3, 4, 3)));
        assert!(rook_shape_is_legal(board, Move::new(0, 3, 0, 7)));
        assert!(!rook_shape_is_legal(board, Move::new(0, 3, 1, 4)));
    }
}

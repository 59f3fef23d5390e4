use crate::game_state::chess_types::*;
use crate::move_validation::legal_move_shared::{is_diagonal, path_is_clear};

/// Bishop shape: along a diagonal with nothing in between.
pub fn bishop_shape_is_legal(board: &Board, mv: Move) -> bool {
    is_diagonal(mv) && path_is_clear(board, mv)
}

#[cfg(test)]
mod tests {
    use super::bishop_shape_is_legal;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_walks_all_four_diagonals() {
        let position =
            Position::from_fen("4k3/8/8/8/3B4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let board = &position.board;
        assert!(bishop_shape_is_legal(board, Move::new(3, 3, 7, 7)));
        assert!(bishop_shape_is_legal(board, Move::new(3, 3, 0, 0)));
        assert!(bishop_shape_is_legal(board, Move::new(3, 3, 6, 0)));
        assert!(bishop_shape_is_legal(board, Move::new(3, 3, 0, 6)));
        assert!(!bishop_shape_is_legal(board, Move::new(3, 3, 3, 6)));
        assert!(!bishop_shape_is_legal(board, Move::new(3, 3, 5, 4)));
    }

    #[test]
    fn bishop_cannot_jump() {
        let board = Board::starting();
        assert!(!bishop_shape_is_legal(&board, Move::new(2, 0, 4, 2)));
    }
}

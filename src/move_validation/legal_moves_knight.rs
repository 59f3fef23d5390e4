use crate::game_state::chess_types::*;

/// Knight shape: squared displacement of exactly five, i.e. (1, 2) or (2, 1).
#[inline]
pub fn knight_shape_is_legal(mv: Move) -> bool {
    mv.squared_distance() == 5
}

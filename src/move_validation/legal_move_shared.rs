//! Geometry helpers shared by the per-piece shape rules.

use crate::game_state::chess_types::*;

/// Purely horizontal or vertical displacement.
#[inline]
pub fn is_straight(mv: Move) -> bool {
    mv.file_delta() == 0 || mv.rank_delta() == 0
}

/// Equal file and rank displacement.
#[inline]
pub fn is_diagonal(mv: Move) -> bool {
    mv.file_delta().abs() == mv.rank_delta().abs()
}

/// Index delta of one step from the source towards the destination.
///
/// ±1 / ±8 along files and ranks, ±7 / ±9 along diagonals. Only meaningful
/// for straight or diagonal moves.
#[inline]
fn line_step(mv: Move) -> i8 {
    mv.file_delta().signum() + 8 * mv.rank_delta().signum()
}

/// True if every square strictly between source and destination is empty.
///
/// The move must lie on a rank, file or diagonal.
pub fn path_is_clear(board: &Board, mv: Move) -> bool {
    debug_assert!(is_straight(mv) || is_diagonal(mv));
    let step = line_step(mv);
    let to = mv.to() as i8;
    let mut square = mv.from() as i8 + step;
    while square != to {
        if !board.is_empty_square(square as Square) {
            return false;
        }
        square += step;
    }
    true
}

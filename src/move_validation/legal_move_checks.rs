//! Attack and check detection.
//!
//! A square is attacked by a color when some piece of that color could
//! reach it under attack-probe rules: shape and path only, no castling and
//! no self-check filter. Only the destination is fixed, so a probe costs one
//! shape test per occupied square.

use crate::game_state::chess_types::*;
use crate::move_validation::legal_move_validator::{validate_in_mode, ValidationMode};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .occupied()
        .filter(|(_, piece)| piece.belongs_to(attacker_color))
        .any(|(from, _)| {
            validate_in_mode(
                board,
                Move::from_squares(from, square),
                attacker_color,
                ValidationMode::AttackProbe,
            )
        })
}

/// `is_square_attacked` addressed by rank and file.
#[inline]
pub fn is_square_attacked_at(board: &Board, rank: u8, file: u8, attacker_color: Color) -> bool {
    is_square_attacked(board, square_of(file, rank), attacker_color)
}

/// A board without a king for `player` is never in check.
pub fn is_player_in_check(player: Color, board: &Board) -> bool {
    let Some(king_sq) = king_square(board, player) else {
        return false;
    };
    is_square_attacked(board, king_sq, player.opposite())
}

/// Squares holding a piece of `attacker_color` that attacks `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<Square> {
    board
        .occupied()
        .filter(|(_, piece)| piece.belongs_to(attacker_color))
        .map(|(from, _)| from)
        .filter(|&from| {
            validate_in_mode(
                board,
                Move::from_squares(from, square),
                attacker_color,
                ValidationMode::AttackProbe,
            )
        })
        .collect()
}

//! Move legality oracle.
//!
//! `validate_move` runs a fixed sequence of short-circuit checks: occupied
//! source, nonzero displacement, mover owns the piece, per-piece shape and
//! path, destination not held by the mover, and finally (unless the call is
//! hypothetical) a simulation on a scratch copy of the board that rejects
//! moves leaving the mover's king attacked.
//!
//! Hypothetical validation applies every movement rule and skips only the
//! self-check filter. Check detection uses a narrower attack probe that asks
//! whether a piece reaches a square, so it needs no castling rights or move
//! history and never recurses into castling.

use crate::game_state::chess_types::*;
use crate::move_validation::legal_move_apply::execute_on_board;
use crate::move_validation::legal_move_checks::is_player_in_check;
use crate::move_validation::legal_moves_bishop::bishop_shape_is_legal;
use crate::move_validation::legal_moves_king::king_shape_is_legal;
use crate::move_validation::legal_moves_knight::knight_shape_is_legal;
use crate::move_validation::legal_moves_pawn::pawn_shape_is_legal;
use crate::move_validation::legal_moves_queen::queen_shape_is_legal;
use crate::move_validation::legal_moves_rook::rook_shape_is_legal;

/// How much of the rule set a validation applies.
#[derive(Debug, Clone, Copy)]
pub enum ValidationMode<'a> {
    /// Shape and path only; pawns attack both forward diagonals, kings reach
    /// one square, no self-check filter. Used by attack detection.
    AttackProbe,
    /// Every movement rule, with castling rights and en-passant history read
    /// from `position`. `self_check` adds the final filter that rejects moves
    /// leaving the mover's king attacked.
    Full {
        position: &'a Position,
        self_check: bool,
    },
}

/// Is `mv` legal for `mover` on `board`?
///
/// `board` need not be `position.board`; castling rights and the last move
/// always come from `position`. With `hypothetical` set every movement rule
/// still applies and only the final self-check filter is skipped.
pub fn validate_move(
    position: &Position,
    board: &Board,
    mv: Move,
    mover: Color,
    hypothetical: bool,
) -> bool {
    let mode = ValidationMode::Full {
        position,
        self_check: !hypothetical,
    };
    validate_in_mode(board, mv, mover, mode)
}

pub fn validate_in_mode(board: &Board, mv: Move, mover: Color, mode: ValidationMode<'_>) -> bool {
    let piece = board.piece_at(mv.from());
    let Some(kind) = piece.kind() else {
        return false;
    };
    if mv.is_zero_distance() {
        return false;
    }
    if !piece.belongs_to(mover) {
        return false;
    }

    let shape_ok = match kind {
        PieceKind::Pawn => pawn_shape_is_legal(board, mv, mover, mode),
        PieceKind::Knight => knight_shape_is_legal(mv),
        PieceKind::Bishop => bishop_shape_is_legal(board, mv),
        PieceKind::Rook => rook_shape_is_legal(board, mv),
        PieceKind::Queen => queen_shape_is_legal(board, mv),
        PieceKind::King => king_shape_is_legal(board, mv, mover, mode),
    };
    if !shape_ok {
        return false;
    }

    if board.piece_at(mv.to()).belongs_to(mover) {
        return false;
    }

    match mode {
        ValidationMode::Full {
            self_check: true, ..
        } => {
            let mut scratch = *board;
            execute_on_board(&mut scratch, mv);
            !is_player_in_check(mover, &scratch)
        }
        _ => true,
    }
}

/// Scans all 4096 source/destination pairs for one fully legal move.
pub fn has_any_legal_move(position: &Position, player: Color) -> bool {
    (0..64u8).any(|from| {
        (0..64u8).any(|to| {
            validate_move(
                position,
                &position.board,
                Move::from_squares(from, to),
                player,
                false,
            )
        })
    })
}

/// Every fully legal move for `player`, ordered by source then destination.
pub fn legal_moves(position: &Position, player: Color) -> Vec<Move> {
    position
        .board
        .occupied()
        .filter(|(_, piece)| piece.belongs_to(player))
        .flat_map(|(from, _)| (0..64u8).map(move |to| Move::from_squares(from, to)))
        .filter(|&mv| validate_move(position, &position.board, mv, player, false))
        .collect()
}

/// Destinations the side to move can legally reach from `from`.
pub fn legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    (0..64u8)
        .filter(|&to| {
            validate_move(
                position,
                &position.board,
                Move::from_squares(from, to),
                position.side_to_move,
                false,
            )
        })
        .collect()
}

use crate::game_state::chess_rules::{back_rank, KING_HOME_FILE};
use crate::game_state::chess_types::*;
use crate::move_validation::legal_move_checks::is_square_attacked;
use crate::move_validation::legal_move_validator::ValidationMode;

/// King shape for a king of `color`.
///
/// A one-square step is legal when the destination is not attacked by the
/// opponent. That test is part of the self-check filter and is skipped when
/// the filter is off. A two-file step along the back rank is a castling
/// attempt; it never counts in attack-probe mode, so attack detection never
/// recurses into castling evaluation.
pub fn king_shape_is_legal(board: &Board, mv: Move, color: Color, mode: ValidationMode<'_>) -> bool {
    let squared_distance = mv.squared_distance();

    if squared_distance <= 2 {
        return match mode {
            ValidationMode::Full {
                self_check: true, ..
            } => !is_square_attacked(board, mv.to(), color.opposite()),
            _ => true,
        };
    }

    match mode {
        ValidationMode::Full { position, .. } if squared_distance == 4 && mv.rank_delta() == 0 => {
            castling_is_legal(position, board, mv, color)
        }
        _ => false,
    }
}

/// Castling from the home square towards `mv`'s destination.
///
/// Requires the matching right, an own rook in the corner, every square
/// between king and rook empty, and none of the king's current, passed or
/// landing squares attacked.
fn castling_is_legal(position: &Position, board: &Board, mv: Move, color: Color) -> bool {
    let side = if mv.file_delta() > 0 {
        CastleSide::Kingside
    } else {
        CastleSide::Queenside
    };
    let home_rank = back_rank(color);

    if mv.source_rank() != home_rank || mv.source_file() != KING_HOME_FILE {
        return false;
    }
    if !position.has_castling_right(side.right(color)) {
        return false;
    }
    if !board
        .piece_on(side.rook_file(), home_rank)
        .is(color, PieceKind::Rook)
    {
        return false;
    }

    let (low, high) = if side.rook_file() < KING_HOME_FILE {
        (side.rook_file(), KING_HOME_FILE)
    } else {
        (KING_HOME_FILE, side.rook_file())
    };
    if ((low + 1)..high).any(|file| !board.piece_on(file, home_rank).is_empty()) {
        return false;
    }

    let opponent = color.opposite();
    let step = mv.file_delta().signum();
    (0..=2).all(|i| {
        let file = (KING_HOME_FILE as i8 + step * i) as u8;
        !is_square_attacked(board, square_of(file, home_rank), opponent)
    })
}

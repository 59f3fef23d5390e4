use crate::game_state::chess_rules::{en_passant_capture_rank, pawn_home_rank};
use crate::game_state::chess_types::*;
use crate::move_validation::legal_move_validator::ValidationMode;

/// Pawn shape for a pawn of `color`.
///
/// In attack-probe mode only the two forward diagonals count, whatever
/// stands on them. Otherwise: single step onto an empty square, double step
/// from the home rank through two empty squares, or a diagonal step that
/// captures an opposing piece or captures en passant.
pub fn pawn_shape_is_legal(board: &Board, mv: Move, color: Color, mode: ValidationMode<'_>) -> bool {
    let forward = color.pawn_direction();
    let file_delta = mv.file_delta().abs();
    let rank_delta = mv.rank_delta();

    let ValidationMode::Full { position, .. } = mode else {
        return file_delta == 1 && rank_delta == forward;
    };

    match file_delta {
        0 if rank_delta == forward => board.is_empty_square(mv.to()),
        0 if rank_delta == 2 * forward => {
            let middle = square_of(mv.source_file(), (mv.source_rank() as i8 + forward) as u8);
            mv.source_rank() == pawn_home_rank(color)
                && board.is_empty_square(middle)
                && board.is_empty_square(mv.to())
        }
        1 if rank_delta == forward => match board.piece_at(mv.to()).color() {
            Some(occupant) => occupant != color,
            None => is_en_passant_capture(position, board, mv, color),
        },
        _ => false,
    }
}

/// Diagonal step onto an empty square right after an opposing pawn
/// double-stepped past it onto the capturing pawn's rank.
fn is_en_passant_capture(position: &Position, board: &Board, mv: Move, color: Color) -> bool {
    let Some(last_move) = position.last_move else {
        return false;
    };
    let opponent = color.opposite();
    let passed_file = mv.dest_file();
    let expected = Move::new(
        passed_file,
        pawn_home_rank(opponent),
        passed_file,
        mv.source_rank(),
    );

    mv.source_rank() == en_passant_capture_rank(color)
        && last_move == expected
        && board
            .piece_on(passed_file, mv.source_rank())
            .is(opponent, PieceKind::Pawn)
}

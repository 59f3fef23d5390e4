//! Move execution.
//!
//! [`execute_on_board`] is the hypothetical execution: it only rewrites the
//! squares of the board it is handed. [`execute_move`] commits a move to a
//! live position, adding the castling-rights update and the `last_move`
//! record on top. Neither flips the side to move; a pending promotion has to
//! be resolved first.

use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePawnPush,
    EnPassant,
    Castle(CastleSide),
}

/// What executing a move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutedMove {
    pub mv: Move,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    /// A pawn reached its last rank; the destination holds a placeholder
    /// queen until the caller picks the final piece.
    pub promotion_pending: bool,
}

impl ExecutedMove {
    /// Captures and pawn moves reset the fifty-move count.
    pub fn is_irreversible(&self) -> bool {
        self.captured.is_some() || self.moved.kind() == Some(PieceKind::Pawn)
    }
}

/// Applies `mv` to `board` without any bookkeeping.
///
/// Beyond moving the piece, a diagonal pawn step onto an empty square removes
/// the en-passant victim and a two-file king step relocates the castling rook,
/// so a self-check simulation sees the board the move really produces. A pawn
/// reaching its last rank becomes a placeholder queen. Legality is not
/// checked and castling rights are left untouched.
pub fn execute_on_board(board: &mut Board, mv: Move) -> ExecutedMove {
    let from = mv.from();
    let to = mv.to();
    let moved = board.piece_at(from);
    debug_assert!(!moved.is_empty(), "executing a move from an empty square");

    let moved_kind = moved.kind();
    let promotion_pending = match (moved.color(), moved_kind) {
        (Some(color), Some(PieceKind::Pawn)) => mv.dest_rank() == promotion_rank(color),
        _ => false,
    };

    let mut captured = Some(board.piece_at(to)).filter(|piece| !piece.is_empty());
    let mut kind = if captured.is_some() {
        MoveKind::Capture
    } else {
        MoveKind::Quiet
    };

    match moved_kind {
        Some(PieceKind::Pawn) if mv.file_delta() != 0 && captured.is_none() => {
            let victim = square_of(mv.dest_file(), mv.source_rank());
            captured = Some(board.take(victim)).filter(|piece| !piece.is_empty());
            kind = MoveKind::EnPassant;
        }
        Some(PieceKind::Pawn) if mv.rank_delta().abs() == 2 => {
            kind = MoveKind::DoublePawnPush;
        }
        Some(PieceKind::King) if mv.file_delta().abs() == 2 => {
            let side = if mv.file_delta() > 0 {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            };
            let rank = mv.source_rank();
            let rook = board.take(square_of(side.rook_file(), rank));
            board.set(square_of(side.rook_destination_file(), rank), rook);
            kind = MoveKind::Castle(side);
        }
        _ => {}
    }

    let piece = board.take(from);
    board.set(to, piece);

    if promotion_pending {
        if let Some(color) = moved.color() {
            board.set(to, Piece::new(color, PieceKind::Queen));
        }
    }

    ExecutedMove {
        mv,
        moved,
        captured,
        kind,
        promotion_pending,
    }
}

/// Commits `mv` to `position`: board effects, castling rights, `last_move`.
pub fn execute_move(position: &mut Position, mv: Move) -> ExecutedMove {
    let executed = execute_on_board(&mut position.board, mv);
    update_castling_rights(position, &executed);
    position.last_move = Some(mv);
    executed
}

fn update_castling_rights(position: &mut Position, executed: &ExecutedMove) {
    let from = executed.mv.from();
    let to = executed.mv.to();

    match executed.moved {
        Piece::WhiteKing => {
            position.castling_rights &= !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE);
        }
        Piece::BlackKing => {
            position.castling_rights &= !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        }
        Piece::WhiteRook | Piece::BlackRook => {
            position.castling_rights &= !corner_right(from);
        }
        _ => {}
    }

    // Capturing a rook on its original square also removes rights.
    if executed.captured.is_some() {
        position.castling_rights &= !corner_right(to);
    }
}

/// Castling right tied to the rook starting on `square`, or 0.
fn corner_right(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_WHITE_QUEENSIDE,
        7 => CASTLE_WHITE_KINGSIDE,
        56 => CASTLE_BLACK_QUEENSIDE,
        63 => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}

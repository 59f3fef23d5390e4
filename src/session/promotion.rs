//! Promotion piece selection.
//!
//! A promoted pawn first becomes a queen. Until the owner confirms, the
//! piece can be cycled through the options below in either direction or
//! replaced by a direct choice.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

/// Cycle order for the promotion placeholder.
pub const PROMOTION_OPTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Knight,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

/// The option after (or before) `current`, wrapping around.
///
/// Anything that is not a promotion option restarts the cycle at the queen.
pub fn cycle_promotion_kind(current: PieceKind, direction: CycleDirection) -> PieceKind {
    let Some(index) = PROMOTION_OPTIONS.iter().position(|&kind| kind == current) else {
        return PieceKind::Queen;
    };
    let len = PROMOTION_OPTIONS.len();
    let next = match direction {
        CycleDirection::Forward => (index + 1) % len,
        CycleDirection::Backward => (index + len - 1) % len,
    };
    PROMOTION_OPTIONS[next]
}

pub fn ensure_promotion_kind(kind: PieceKind) -> ChessResult<()> {
    if PROMOTION_OPTIONS.contains(&kind) {
        Ok(())
    } else {
        Err(ChessError::InvalidPromotionPiece(kind))
    }
}

/// Parses `q`, `b`, `r` or `n` (either case).
pub fn promotion_kind_from_char(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'q' => Some(PieceKind::Queen),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}

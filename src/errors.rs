//! Errors used throughout the crate.
//!
//! Illegal moves are not errors: the rules engine answers legality with a
//! plain `bool`. `ChessError` covers the genuinely fallible edges instead:
//! parsing notation and FEN, and session operations issued at the wrong
//! time (moving after the game ended, or while a promotion is undecided).

use crate::game_state::chess_types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// File or rank index outside `0..=7`.
    #[error("file/rank out of range: ({file}, {rank})")]
    InvalidFileOrRank { file: u8, rank: u8 },

    /// A square such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    /// A coordinate move such as `e2e4` could not be parsed.
    #[error("invalid long algebraic move: {0}")]
    InvalidLongAlgebraic(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The session already reached a terminal outcome.
    #[error("the game is already over")]
    GameOver,

    /// A pawn promotion must be resolved before the next move.
    #[error("a promotion is pending and must be resolved first")]
    PromotionPending,

    #[error("no promotion is pending")]
    NoPromotionPending,

    /// Pawns may promote to knight, bishop, rook or queen only.
    #[error("cannot promote to {0:?}")]
    InvalidPromotionPiece(PieceKind),
}

pub type ChessResult<T> = Result<T, ChessError>;

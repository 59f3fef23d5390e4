//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the ranks and limits the rules engine and the
//! session layer key off.

use crate::game_state::chess_types::{Color, Piece};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// White back rank, file a through h.
pub const WHITE_BACK_RANK: [Piece; 8] = [
    Piece::WhiteRook,
    Piece::WhiteKnight,
    Piece::WhiteBishop,
    Piece::WhiteQueen,
    Piece::WhiteKing,
    Piece::WhiteBishop,
    Piece::WhiteKnight,
    Piece::WhiteRook,
];

/// Black back rank, file a through h.
pub const BLACK_BACK_RANK: [Piece; 8] = [
    Piece::BlackRook,
    Piece::BlackKnight,
    Piece::BlackBishop,
    Piece::BlackQueen,
    Piece::BlackKing,
    Piece::BlackBishop,
    Piece::BlackKnight,
    Piece::BlackRook,
];

/// File the king starts on.
pub const KING_HOME_FILE: u8 = 4;

/// Half-moves without a capture or pawn move after which the game is drawn.
pub const FIFTY_MOVE_LIMIT_HALF_MOVES: u16 = 100;

#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Rank the pawns of `color` start on (and may double-step from).
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Rank a pawn of `color` promotes on.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Rank a pawn of `color` must stand on to capture en passant.
#[inline]
pub const fn en_passant_capture_rank(color: Color) -> u8 {
    match color {
        Color::White => 4,
        Color::Black => 3,
    }
}

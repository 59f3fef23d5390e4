//! Flat 64-square mailbox board.
//!
//! `Board` is a plain `Copy` value. Hypothetical probes take their own copy
//! before mutating, so a simulation can never leak into the board it was
//! derived from.

use crate::game_state::chess_rules::{BLACK_BACK_RANK, WHITE_BACK_RANK};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Piece; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [Piece::Empty; 64],
        }
    }

    /// Standard initial layout.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for file in 0..8u8 {
            board.set(square_of(file, 0), WHITE_BACK_RANK[file as usize]);
            board.set(square_of(file, 1), Piece::WhitePawn);
            board.set(square_of(file, 6), Piece::BlackPawn);
            board.set(square_of(file, 7), BLACK_BACK_RANK[file as usize]);
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.squares[square as usize]
    }

    #[inline]
    pub fn piece_on(&self, file: u8, rank: u8) -> Piece {
        self.piece_at(square_of(file, rank))
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.piece_at(square).is_empty()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.squares[square as usize] = piece;
    }

    /// Empties `square` and returns what stood there.
    #[inline]
    pub fn take(&mut self, square: Square) -> Piece {
        std::mem::take(&mut self.squares[square as usize])
    }

    /// First square holding `color`'s king, if any.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.squares
            .iter()
            .position(|&piece| piece == king)
            .map(|index| index as Square)
    }

    /// Iterates `(square, piece)` over occupied squares.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_empty())
            .map(|(index, &piece)| (index as Square, piece))
    }
}

//! Core value types shared by the board model and the rules engine.
//!
//! Squares are plain indices (`rank * 8 + file`), pieces are a closed
//! thirteen-value enumeration whose variant alone decides the color, and
//! castling rights are a four-bit mask.

pub use crate::game_state::board::Board;
pub use crate::game_state::chess_move::Move;
pub use crate::game_state::position::Position;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a forward pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

/// Piece kind without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// Content of one board square.
///
/// Color is carried by the variant itself; nothing else is consulted to
/// decide which side a piece belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Piece {
    #[default]
    Empty,
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        match (color, kind) {
            (Color::White, PieceKind::Pawn) => Piece::WhitePawn,
            (Color::White, PieceKind::Knight) => Piece::WhiteKnight,
            (Color::White, PieceKind::Bishop) => Piece::WhiteBishop,
            (Color::White, PieceKind::Rook) => Piece::WhiteRook,
            (Color::White, PieceKind::Queen) => Piece::WhiteQueen,
            (Color::White, PieceKind::King) => Piece::WhiteKing,
            (Color::Black, PieceKind::Pawn) => Piece::BlackPawn,
            (Color::Black, PieceKind::Knight) => Piece::BlackKnight,
            (Color::Black, PieceKind::Bishop) => Piece::BlackBishop,
            (Color::Black, PieceKind::Rook) => Piece::BlackRook,
            (Color::Black, PieceKind::Queen) => Piece::BlackQueen,
            (Color::Black, PieceKind::King) => Piece::BlackKing,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::WhitePawn
            | Piece::WhiteKnight
            | Piece::WhiteBishop
            | Piece::WhiteRook
            | Piece::WhiteQueen
            | Piece::WhiteKing => Some(Color::White),
            Piece::BlackPawn
            | Piece::BlackKnight
            | Piece::BlackBishop
            | Piece::BlackRook
            | Piece::BlackQueen
            | Piece::BlackKing => Some(Color::Black),
        }
    }

    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::WhitePawn | Piece::BlackPawn => Some(PieceKind::Pawn),
            Piece::WhiteKnight | Piece::BlackKnight => Some(PieceKind::Knight),
            Piece::WhiteBishop | Piece::BlackBishop => Some(PieceKind::Bishop),
            Piece::WhiteRook | Piece::BlackRook => Some(PieceKind::Rook),
            Piece::WhiteQueen | Piece::BlackQueen => Some(PieceKind::Queen),
            Piece::WhiteKing | Piece::BlackKing => Some(PieceKind::King),
        }
    }

    #[inline]
    pub fn belongs_to(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self == Piece::new(color, kind)
    }
}

/// All twelve non-empty pieces, white first.
pub const ALL_PIECES: [Piece; 12] = [
    Piece::WhitePawn,
    Piece::WhiteKnight,
    Piece::WhiteBishop,
    Piece::WhiteRook,
    Piece::WhiteQueen,
    Piece::WhiteKing,
    Piece::BlackPawn,
    Piece::BlackKnight,
    Piece::BlackBishop,
    Piece::BlackRook,
    Piece::BlackQueen,
    Piece::BlackKing,
];

/// Board square index (`0..=63`, `rank * 8 + file`).
pub type Square = u8;

#[inline]
pub fn square_of(file: u8, rank: u8) -> Square {
    assert!(file < 8 && rank < 8, "file/rank out of range: ({file}, {rank})");
    rank * 8 + file
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

/// Castling rights bitmask.
pub type CastlingRights = u8;
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

/// Castling wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const fn right(self, color: Color) -> CastlingRights {
        match (color, self) {
            (Color::White, CastleSide::Kingside) => CASTLE_WHITE_KINGSIDE,
            (Color::White, CastleSide::Queenside) => CASTLE_WHITE_QUEENSIDE,
            (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_QUEENSIDE,
        }
    }

    /// File of the rook that castles on this wing.
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the rook lands on after castling.
    pub const fn rook_destination_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }
}

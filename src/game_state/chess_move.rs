//! The `Move` value type.

use crate::game_state::chess_types::{square_of, Square};

/// A candidate move: source and destination coordinates, nothing else.
///
/// Two moves are equal iff all four coordinates match. Whether the move is
/// legal, a capture, a castle or a promotion is decided against a board by
/// the rules engine, never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source_file: u8,
    source_rank: u8,
    dest_file: u8,
    dest_rank: u8,
}

impl Move {
    /// Panics if any coordinate is outside `0..=7`.
    pub fn new(source_file: u8, source_rank: u8, dest_file: u8, dest_rank: u8) -> Self {
        assert!(
            source_file < 8 && source_rank < 8 && dest_file < 8 && dest_rank < 8,
            "move coordinates out of range: ({source_file}, {source_rank}) -> ({dest_file}, {dest_rank})"
        );
        Self {
            source_file,
            source_rank,
            dest_file,
            dest_rank,
        }
    }

    pub fn from_squares(from: Square, to: Square) -> Self {
        assert!(from < 64 && to < 64, "square index out of range: {from} -> {to}");
        Self::new(from % 8, from / 8, to % 8, to / 8)
    }

    #[inline]
    pub const fn source_file(self) -> u8 {
        self.source_file
    }

    #[inline]
    pub const fn source_rank(self) -> u8 {
        self.source_rank
    }

    #[inline]
    pub const fn dest_file(self) -> u8 {
        self.dest_file
    }

    #[inline]
    pub const fn dest_rank(self) -> u8 {
        self.dest_rank
    }

    #[inline]
    pub fn from(self) -> Square {
        square_of(self.source_file, self.source_rank)
    }

    #[inline]
    pub fn to(self) -> Square {
        square_of(self.dest_file, self.dest_rank)
    }

    #[inline]
    pub const fn file_delta(self) -> i8 {
        self.dest_file as i8 - self.source_file as i8
    }

    #[inline]
    pub const fn rank_delta(self) -> i8 {
        self.dest_rank as i8 - self.source_rank as i8
    }

    /// Squared Euclidean length of the displacement.
    #[inline]
    pub const fn squared_distance(self) -> i32 {
        let df = self.file_delta() as i32;
        let dr = self.rank_delta() as i32;
        df * df + dr * dr
    }

    #[inline]
    pub const fn is_zero_distance(self) -> bool {
        self.source_file == self.dest_file && self.source_rank == self.dest_rank
    }
}

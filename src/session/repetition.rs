//! Threefold-repetition tracking.
//!
//! Two membership sets: a position seen once lives in `seen_once`, a
//! position seen twice is also in `seen_twice`. Meeting a position that is
//! already in `seen_twice` is its third occurrence.

use std::collections::HashSet;

use crate::game_state::chess_types::Position;

#[derive(Debug, Clone, Default)]
pub struct RepetitionTracker {
    seen_once: HashSet<Position>,
    seen_twice: HashSet<Position>,
}

impl RepetitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `position`; true on its third occurrence.
    pub fn record(&mut self, position: &Position) -> bool {
        if !self.seen_once.contains(position) {
            self.seen_once.insert(position.deep_copy());
            return false;
        }
        if self.seen_twice.contains(position) {
            return true;
        }
        self.seen_twice.insert(position.deep_copy());
        false
    }

    /// Forgets every position. Used after captures and pawn moves.
    pub fn clear(&mut self) {
        self.seen_once.clear();
        self.seen_twice.clear();
    }

    pub fn distinct_positions(&self) -> usize {
        self.seen_once.len()
    }

    pub fn repeated_positions(&self) -> usize {
        self.seen_twice.len()
    }
}

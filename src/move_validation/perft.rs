//! Perft node counting over the legality oracle.
//!
//! Walks the full legal move tree to a fixed depth and tallies leaf
//! statistics. Promotions count once each, since the engine places a
//! placeholder queen and leaves the final choice to the caller.

use crate::game_state::chess_types::*;
use crate::move_validation::legal_move_apply::MoveKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in position.legal_moves() {
        let mut next = position.deep_copy();
        let executed = next.execute(mv);
        next.pass_turn();

        if depth > 1 {
            total.merge(perft(&next, depth - 1));
            continue;
        }

        total.nodes += 1;
        if executed.captured.is_some() {
            total.captures += 1;
        }
        match executed.kind {
            MoveKind::EnPassant => total.en_passant += 1,
            MoveKind::Castle(_) => total.castles += 1,
            _ => {}
        }
        if executed.promotion_pending {
            total.promotions += 1;
        }
        if next.is_player_in_check(next.side_to_move) {
            total.checks += 1;
            if !next.has_any_legal_move(next.side_to_move) {
                total.checkmates += 1;
            }
        }
    }

    total
}

/// Node count per root move, in `legal_moves` order.
pub fn perft_divide(position: &Position, depth: u8) -> Vec<(Move, usize)> {
    position
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let mut next = position.deep_copy();
            next.execute(mv);
            next.pass_turn();
            (mv, perft(&next, depth.saturating_sub(1)).nodes)
        })
        .collect()
}

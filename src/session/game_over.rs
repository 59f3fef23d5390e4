//! Terminal-state classification.

use std::fmt;

use crate::game_state::chess_types::*;

/// Where a game stands after the last completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    ThreefoldRepetition,
    FiftyMoveRule,
    Agreement,
}

impl GameOutcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }

    #[inline]
    pub fn is_draw(self) -> bool {
        matches!(
            self,
            GameOutcome::Stalemate
                | GameOutcome::ThreefoldRepetition
                | GameOutcome::FiftyMoveRule
                | GameOutcome::Agreement
        )
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => f.write_str("in progress"),
            GameOutcome::Checkmate { winner: Color::White } => f.write_str("checkmate, White wins"),
            GameOutcome::Checkmate { winner: Color::Black } => f.write_str("checkmate, Black wins"),
            GameOutcome::Stalemate => f.write_str("draw by stalemate"),
            GameOutcome::ThreefoldRepetition => f.write_str("draw by threefold repetition"),
            GameOutcome::FiftyMoveRule => f.write_str("draw by the fifty-move rule"),
            GameOutcome::Agreement => f.write_str("draw by agreement"),
        }
    }
}

/// Checkmate or stalemate for the side to move, if it has no legal move.
///
/// Everything else (repetition, move counting, agreement) is session state
/// and is decided by the caller.
pub fn classify_no_legal_move(position: &Position) -> Option<GameOutcome> {
    let player = position.side_to_move;
    if position.has_any_legal_move(player) {
        return None;
    }
    Some(if position.is_player_in_check(player) {
        GameOutcome::Checkmate {
            winner: player.opposite(),
        }
    } else {
        GameOutcome::Stalemate
    })
}

//! Session configuration.

use crate::game_state::chess_rules::FIFTY_MOVE_LIMIT_HALF_MOVES;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Side to move in the standard starting layout. Ignored when
    /// `starting_fen` is set.
    pub starting_side: Color,
    /// Start from this position instead of the standard layout.
    pub starting_fen: Option<String>,
    /// Half-moves without a capture or pawn move before the game is drawn.
    pub fifty_move_limit: u16,
    pub repetition_draw: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_side: Color::White,
            starting_fen: None,
            fifty_move_limit: FIFTY_MOVE_LIMIT_HALF_MOVES,
            repetition_draw: true,
        }
    }
}

impl SessionConfig {
    pub fn with_starting_side(mut self, side: Color) -> Self {
        self.starting_side = side;
        self
    }

    pub fn with_starting_fen(mut self, fen: impl Into<String>) -> Self {
        self.starting_fen = Some(fen.into());
        self
    }

    pub fn with_fifty_move_limit(mut self, half_moves: u16) -> Self {
        self.fifty_move_limit = half_moves;
        self
    }

    pub fn with_repetition_draw(mut self, enabled: bool) -> Self {
        self.repetition_draw = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::SessionConfig;
    use crate::game_state::chess_types::Color;

    #[test]
    fn default_is_a_standard_game() {
        let config = SessionConfig::default();
        assert_eq!(config.starting_side, Color::White);
        assert_eq!(config.starting_fen, None);
        assert_eq!(config.fifty_move_limit, 100);
        assert!(config.repetition_draw);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = SessionConfig::default()
            .with_starting_side(Color::Black)
            .with_fifty_move_limit(20)
            .with_repetition_draw(false);
        assert_eq!(config.starting_side, Color::Black);
        assert_eq!(config.fifty_move_limit, 20);
        assert!(!config.repetition_draw);
        assert_eq!(config.starting_fen, None);
    }
}

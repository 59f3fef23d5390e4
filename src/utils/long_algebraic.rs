//! Coordinate move notation (`e2e4`).
//!
//! A `Move` carries no promotion piece, so a trailing promotion letter
//! (`e7e8q`) is accepted and ignored on input; the session layer resolves
//! the piece separately.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Move;
use crate::utils::algebraic::algebraic_to_square;

pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    let invalid = || ChessError::InvalidLongAlgebraic(long_algebraic.to_owned());

    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(invalid());
    }
    if text.len() == 5 && !matches!(text.as_bytes()[4].to_ascii_lowercase(), b'q' | b'r' | b'b' | b'n') {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    Ok(Move::from_squares(from, to))
}

pub fn move_to_long_algebraic(mv: Move) -> String {
    format!(
        "{}{}{}{}",
        char::from(b'a' + mv.source_file()),
        mv.source_rank() + 1,
        char::from(b'a' + mv.dest_file()),
        mv.dest_rank() + 1
    )
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        long_algebraic_to_move(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::long_algebraic_to_move;
    use crate::game_state::chess_types::Move;

    #[test]
    fn parses_and_formats_coordinate_moves() {
        let mv = long_algebraic_to_move("e2e4").expect("e2e4 should parse");
        assert_eq!(mv, Move::new(4, 1, 4, 3));
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!("g8f6".parse::<Move>().expect("g8f6 should parse").to_string(), "g8f6");
    }

    #[test]
    fn accepts_a_promotion_suffix() {
        let mv = long_algebraic_to_move("a7a8n").expect("promotion suffix should parse");
        assert_eq!(mv, Move::new(0, 6, 0, 7));
    }

    #[test]
    fn rejects_malformed_moves() {
        assert!(long_algebraic_to_move("e2").is_err());
        assert!(long_algebraic_to_move("e2e9").is_err());
        assert!(long_algebraic_to_move("e7e8k").is_err());
        assert!(long_algebraic_to_move("z2e4").is_err());
    }
}

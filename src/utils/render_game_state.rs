//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the text driver, tests and
//! diagnostics in text environments.

use std::fmt;

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            out.push(piece_to_unicode(board.piece_on(file, rank)).unwrap_or('·'));

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a status line naming the side to move.
pub fn render_position(position: &Position) -> String {
    let side = match position.side_to_move {
        Color::White => "White",
        Color::Black => "Black",
    };
    format!("{}\n{} to move", render_board(&position.board), side)
}

fn piece_to_unicode(piece: Piece) -> Option<char> {
    Some(match piece {
        Piece::Empty => return None,
        Piece::WhitePawn => '♙',
        Piece::WhiteKnight => '♘',
        Piece::WhiteBishop => '♗',
        Piece::WhiteRook => '♖',
        Piece::WhiteQueen => '♕',
        Piece::WhiteKing => '♔',
        Piece::BlackPawn => '♟',
        Piece::BlackKnight => '♞',
        Piece::BlackBishop => '♝',
        Piece::BlackRook => '♜',
        Piece::BlackQueen => '♛',
        Piece::BlackKing => '♚',
    })
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

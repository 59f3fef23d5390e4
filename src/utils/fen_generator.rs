//! Position-to-FEN serializer.
//!
//! The clocks are not part of `Position`, so callers pass them in. The
//! en-passant field is derived from the last move: it names the skipped square
//! after any double pawn step.

use crate::game_state::chess_types::*;

pub fn generate_fen(position: &Position, halfmove_clock: u16, fullmove_number: u16) -> String {
    let board = generate_board_field(&position.board);
    let side_to_move = match position.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position.castling_rights);
    let en_passant = generate_en_passant_field(position);

    format!(
        "{} {} {} {} {} {}",
        board, side_to_move, castling, en_passant, halfmove_clock, fullmove_number
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match piece_to_fen_char(board.piece_on(file, rank)) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(piece: Piece) -> Option<char> {
    let (color, kind) = (piece.color()?, piece.kind()?);
    let base = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    Some(match color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    })
}

fn generate_castling_field(castling_rights: CastlingRights) -> String {
    let mut out = String::new();

    if castling_rights & CASTLE_WHITE_KINGSIDE != 0 {
        out.push('K');
    }
    if castling_rights & CASTLE_WHITE_QUEENSIDE != 0 {
        out.push('Q');
    }
    if castling_rights & CASTLE_BLACK_KINGSIDE != 0 {
        out.push('k');
    }
    if castling_rights & CASTLE_BLACK_QUEENSIDE != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(position: &Position) -> String {
    let Some(file) = position.en_passant_file() else {
        return "-".to_owned();
    };
    let rank = match position.side_to_move {
        Color::White => '6',
        Color::Black => '3',
    };
    format!("{}{}", char::from(b'a' + file), rank)
}

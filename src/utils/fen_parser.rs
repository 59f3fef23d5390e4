//! FEN-to-Position parser.
//!
//! Builds a `Position` from a Forsyth-Edwards Notation string. The
//! en-passant field has no slot of its own in `Position`; it is turned into
//! the double pawn step that must have just been played, which is what the
//! rules engine consults.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::pawn_home_rank;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// A parsed FEN record.
#[derive(Debug, Clone)]
pub struct ParsedFen {
    pub position: Position,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

/// Parses a FEN string. The two clock fields may be omitted and default to
/// `0 1`.
pub fn parse_fen(fen: &str) -> ChessResult<ParsedFen> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let mut position = Position::from_board(board, side_to_move);
    position.castling_rights = parse_castling_rights(castling_part)?;
    position.last_move = parse_en_passant_square(en_passant_part, &position)?;

    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid fullmove number: {fullmove_part}")))?;

    Ok(ParsedFen {
        position,
        halfmove_clock,
        fullmove_number,
    })
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            board.set(square_of(file, board_rank), piece);
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// Rebuilds the double step implied by the en-passant target square.
fn parse_en_passant_square(en_passant_part: &str, position: &Position) -> ChessResult<Option<Move>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("invalid en-passant square: {en_passant_part}")))?;
    let pusher = position.side_to_move.opposite();
    let file = file_of(target);
    let home = pawn_home_rank(pusher);
    let skipped = (home as i8 + pusher.pawn_direction()) as u8;
    let landing = (home as i8 + 2 * pusher.pawn_direction()) as u8;

    if rank_of(target) != skipped {
        return Err(invalid(&format!(
            "en-passant square {en_passant_part} does not fit the side to move"
        )));
    }
    if !position.board.piece_on(file, landing).is(pusher, PieceKind::Pawn) {
        return Err(invalid(&format!(
            "no pawn behind en-passant square {en_passant_part}"
        )));
    }

    Ok(Some(Move::new(file, home, file, landing)))
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

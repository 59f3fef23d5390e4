//! Zobrist hashing for position identity in repetition tracking.
//!
//! The keys are generated from a fixed seed so hashes are deterministic across
//! runs, which is useful for testing and debugging. The key covers exactly the
//! fields `Position` compares for equality, so equal positions hash equally.

use std::sync::OnceLock;

use crate::game_state::chess_types::*;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[u64; 64]; 12],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;

    let mut piece_square = [[0u64; 64]; 12];
    for piece in &mut piece_square {
        for sq in piece {
            *sq = next_random_u64(&mut seed);
        }
    }

    let side_to_move = next_random_u64(&mut seed);

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = next_random_u64(&mut seed);
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = next_random_u64(&mut seed);
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
fn next_random_u64(state: &mut u64) -> u64 {
    // splitmix64
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn piece_table_index(color: Color, kind: PieceKind) -> usize {
    color.index() * 6 + kind.index()
}

/// Key for a `(piece, square)` occupancy term. Empty squares contribute nothing.
#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    match (piece.color(), piece.kind()) {
        (Some(color), Some(kind)) => {
            tables().piece_square[piece_table_index(color, kind)][square as usize]
        }
        _ => 0,
    }
}

/// Key contribution for a castling rights mask (`0..=15`).
#[inline]
pub fn castling_key(castling_rights: CastlingRights) -> u64 {
    tables().castling[(castling_rights & 0x0F) as usize]
}

#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().en_passant_file[file as usize]
}

/// Side-to-move toggle key (xor in when black is to move).
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

pub fn compute_zobrist_key(position: &Position) -> u64 {
    let mut key = 0u64;

    for (square, piece) in position.board.occupied() {
        key ^= piece_square_key(piece, square);
    }

    if position.side_to_move == Color::Black {
        key ^= side_to_move_key();
    }

    key ^= castling_key(position.castling_rights);

    if let Some(file) = position.en_passant_file() {
        key ^= en_passant_file_key(file);
    }

    key
}

#[cfg(test)]
mod tests {
    use super::compute_zobrist_key;
    use crate::game_state::chess_types::Position;

    #[test]
    fn starting_position_hash_is_deterministic() {
        assert_eq!(
            compute_zobrist_key(&Position::new_game()),
            compute_zobrist_key(&Position::new_game())
        );
    }

    #[test]
    fn side_to_move_changes_hash() {
        let w = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let b = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert_ne!(compute_zobrist_key(&w), compute_zobrist_key(&b));
    }

    #[test]
    fn castling_rights_change_hash() {
        let with_rights =
            Position::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let without_rights =
            Position::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert_ne!(
            compute_zobrist_key(&with_rights),
            compute_zobrist_key(&without_rights)
        );
    }

    #[test]
    fn en_passant_file_changes_hash() {
        let no_ep =
            Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let ep = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").expect("FEN should parse");
        assert_ne!(compute_zobrist_key(&no_ep), compute_zobrist_key(&ep));
    }
}

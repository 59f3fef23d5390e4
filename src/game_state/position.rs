//! Full rules-relevant game position.
//!
//! `Position` bundles the board with the side to move, the castling rights
//! and the last executed move. It is the unit the session layer snapshots
//! for repetition tracking, so equality and hashing are structural over
//! exactly the state that decides which moves are legal:
//!
//! - board contents,
//! - side to move,
//! - all four castling flags,
//! - the derived en-passant file ([`Position::en_passant_file`]).
//!
//! The raw `last_move` is not compared: two positions reached by different
//! final moves are equal unless en-passant eligibility differs.

use std::hash::{Hash, Hasher};

use crate::errors::ChessResult;
use crate::game_state::chess_rules::pawn_home_rank;
use crate::game_state::chess_types::*;
use crate::game_state::zobrist::compute_zobrist_key;
use crate::move_validation::legal_move_apply::{execute_move, ExecutedMove};
use crate::move_validation::legal_move_checks::is_player_in_check;
use crate::move_validation::legal_move_validator::{
    has_any_legal_move, legal_destinations, legal_moves, validate_move,
};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub last_move: Option<Move>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// Standard layout, White to move, all castling rights, no last move.
    pub fn new_game() -> Self {
        Self::new_game_with_side(Color::White)
    }

    pub fn new_game_with_side(side_to_move: Color) -> Self {
        Self {
            board: Board::starting(),
            side_to_move,
            castling_rights: CASTLE_ALL,
            last_move: None,
        }
    }

    /// Position with the given board and no castling rights or history.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            castling_rights: 0,
            last_move: None,
        }
    }

    /// Parses the placement, side, castling and en-passant fields of `fen`.
    /// Clocks are validated but discarded; see [`parse_fen`] for them.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen).map(|parsed| parsed.position)
    }

    pub fn get_fen(&self) -> String {
        generate_fen(self, 0, 1)
    }

    /// Independent copy: mutating the result never touches `self`.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    /// File of the pawn that may be captured en passant by the side to move.
    ///
    /// `Some` only when the last executed move was a double step by an
    /// opposing pawn that still stands on its landing square.
    pub fn en_passant_file(&self) -> Option<u8> {
        let last = self.last_move?;
        let opponent = self.side_to_move.opposite();
        let double_step = last.file_delta() == 0
            && last.rank_delta() == 2 * opponent.pawn_direction()
            && last.source_rank() == pawn_home_rank(opponent);
        if double_step && self.board.piece_at(last.to()).is(opponent, PieceKind::Pawn) {
            Some(last.dest_file())
        } else {
            None
        }
    }

    pub fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Full legality of `mv` for the side to move on the live board.
    pub fn is_legal(&self, mv: Move) -> bool {
        validate_move(self, &self.board, mv, self.side_to_move, false)
    }

    /// See [`validate_move`].
    pub fn validate(&self, mv: Move, mover: Color, board: &Board, hypothetical: bool) -> bool {
        validate_move(self, board, mv, mover, hypothetical)
    }

    /// Commits `mv` to the live board. Does not flip the side to move.
    pub fn execute(&mut self, mv: Move) -> ExecutedMove {
        execute_move(self, mv)
    }

    pub fn is_player_in_check(&self, player: Color) -> bool {
        is_player_in_check(player, &self.board)
    }

    pub fn has_any_legal_move(&self, player: Color) -> bool {
        has_any_legal_move(self, player)
    }

    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(self, from)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self, self.side_to_move)
    }

    pub fn zobrist_key(&self) -> u64 {
        compute_zobrist_key(self)
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_file() == other.en_passant_file()
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.zobrist_key());
    }
}

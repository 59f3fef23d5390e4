//! Crate root module declarations for the chess_oracle rules engine.
//!
//! Exposes the board model, the move legality oracle, the game session
//! layer, notation helpers and the text driver so the binary, tests and
//! benchmarks can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
    pub mod zobrist;
}

pub mod move_validation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_move_validator;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod session {
    pub mod game_over;
    pub mod game_session;
    pub mod promotion;
    pub mod repetition;
}

pub mod driver {
    pub mod text_driver;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

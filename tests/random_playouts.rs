use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use chess_oracle::errors::ChessError;
use chess_oracle::game_state::chess_types::*;
use chess_oracle::session::game_over::GameOutcome;
use chess_oracle::session::game_session::{GameSession, PlayResult};
use chess_oracle::session::promotion::PROMOTION_OPTIONS;

const GAMES: u64 = 8;
const MAX_PLIES: usize = 160;

fn count_pieces(board: &Board, piece: Piece) -> usize {
    board.occupied().filter(|&(_, p)| p == piece).count()
}

fn assert_position_invariants(position: &Position) {
    assert_eq!(count_pieces(&position.board, Piece::WhiteKing), 1);
    assert_eq!(count_pieces(&position.board, Piece::BlackKing), 1);
    for color in [Color::White, Color::Black] {
        let own = position
            .board
            .occupied()
            .filter(|(_, piece)| piece.belongs_to(color))
            .count();
        assert!(own <= 16, "{color:?} has {own} pieces");
    }
    // The side that just moved never stands in check.
    assert!(!position.is_player_in_check(position.side_to_move.opposite()));

    let reparsed = Position::from_fen(&position.get_fen()).expect("generated FEN should parse");
    assert_eq!(&reparsed, position);
    assert_eq!(reparsed.zobrist_key(), position.zobrist_key());
}

fn play_random_game(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::new_game();

    for _ in 0..MAX_PLIES {
        if session.outcome().is_over() {
            break;
        }

        let position = session.position().clone();
        let moves = position.legal_moves();
        assert!(!moves.is_empty(), "running game without legal moves");
        assert!(position.has_any_legal_move(position.side_to_move));

        // A random square pair is legal exactly when enumeration lists it.
        let probe = Move::from_squares(rng.random_range(0..64), rng.random_range(0..64));
        assert_eq!(position.is_legal(probe), moves.contains(&probe));

        let mv = *moves.choose(&mut rng).expect("moves is non-empty");
        let irreversible = position.board.piece_at(mv.from()).kind() == Some(PieceKind::Pawn)
            || !position.board.piece_at(mv.to()).is_empty();
        let clock_before = session.halfmove_clock();

        match session.play(mv).expect("game is running") {
            PlayResult::Rejected => panic!("enumerated move {mv} was rejected"),
            PlayResult::PromotionPending(square) => {
                assert_eq!(square, mv.to());
                let kind = *PROMOTION_OPTIONS.choose(&mut rng).expect("four options");
                session.promote(kind).expect("promotion is pending");
                assert!(session.position().board.piece_at(square).is(position.side_to_move, kind));
            }
            PlayResult::Completed(_) => {}
        }

        let expected_clock = if irreversible { 0 } else { clock_before + 1 };
        assert_eq!(session.halfmove_clock(), expected_clock);
        assert_eq!(session.side_to_move(), position.side_to_move.opposite());
        assert_position_invariants(session.position());
    }

    match session.outcome() {
        GameOutcome::Checkmate { winner } => {
            assert!(session.position().is_player_in_check(winner.opposite()));
            assert!(session.position().legal_moves().is_empty());
        }
        GameOutcome::Stalemate => {
            assert!(!session.position().is_player_in_check(session.side_to_move()));
            assert!(session.position().legal_moves().is_empty());
        }
        _ => {}
    }
    if session.outcome().is_over() {
        assert_eq!(session.agree_draw(), Err(ChessError::GameOver));
    }
}

#[test]
fn random_games_respect_rule_invariants() {
    for seed in 0..GAMES {
        play_random_game(seed);
    }
}

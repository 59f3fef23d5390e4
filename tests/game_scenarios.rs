use chess_oracle::config::SessionConfig;
use chess_oracle::errors::ChessError;
use chess_oracle::game_state::chess_types::*;
use chess_oracle::session::game_over::GameOutcome;
use chess_oracle::session::game_session::{GameSession, PlayResult};

fn mv(text: &str) -> Move {
    text.parse().expect("test move should parse")
}

fn session_from(fen: &str) -> GameSession {
    GameSession::new(SessionConfig::default().with_starting_fen(fen)).expect("FEN should parse")
}

fn play_line(session: &mut GameSession, moves: &[&str]) -> PlayResult {
    let mut last = PlayResult::Rejected;
    for text in moves {
        last = session.play(mv(text)).expect("game should still be running");
        assert_ne!(last, PlayResult::Rejected, "{text} should be legal");
    }
    last
}

#[test]
fn scholars_mate_is_a_white_win() {
    let mut session = GameSession::new_game();
    let last = play_line(
        &mut session,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert_eq!(
        last,
        PlayResult::Completed(GameOutcome::Checkmate { winner: Color::White })
    );
    assert!(session.position().is_player_in_check(Color::Black));
    assert!(session.position().legal_moves().is_empty());
}

#[test]
fn fools_mate_is_a_black_win() {
    let mut session = GameSession::new_game();
    let last = play_line(&mut session, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(
        last,
        PlayResult::Completed(GameOutcome::Checkmate { winner: Color::Black })
    );
}

#[test]
fn queen_can_stalemate_a_bare_king() {
    let mut session = session_from("k7/8/1Q6/8/8/8/8/7K w - - 0 1");
    assert_eq!(
        session.play(mv("b6c7")),
        Ok(PlayResult::Completed(GameOutcome::Stalemate))
    );
    assert!(!session.position().is_player_in_check(Color::Black));
}

#[test]
fn castling_relocates_the_rook_and_drops_rights() {
    let mut session = session_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play_line(&mut session, &["e1g1"]);
    assert_eq!(session.fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
    play_line(&mut session, &["e8c8"]);
    assert_eq!(session.fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 2 2");
}

#[test]
fn castling_through_an_attacked_square_is_rejected() {
    let mut session = session_from("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1");
    assert_eq!(session.play(mv("e1g1")), Ok(PlayResult::Rejected));
    assert!(matches!(session.play(mv("e1c1")), Ok(PlayResult::Completed(_))));
}

#[test]
fn castling_is_gone_after_the_king_returns_home() {
    let mut session = session_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play_line(&mut session, &["e1f1", "a8b8", "f1e1", "b8a8"]);
    assert_eq!(session.play(mv("e1g1")), Ok(PlayResult::Rejected));
    assert_eq!(session.play(mv("e1c1")), Ok(PlayResult::Rejected));
}

#[test]
fn en_passant_is_available_for_one_reply_only() {
    let mut session = GameSession::new_game();
    play_line(&mut session, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let mut delayed = session.clone();

    play_line(&mut session, &["e5d6"]);
    assert!(session.position().board.piece_on(3, 4).is_empty());
    assert_eq!(session.position().board.piece_on(3, 5), Piece::WhitePawn);
    assert_eq!(session.halfmove_clock(), 0);

    play_line(&mut delayed, &["h2h3", "h7h6"]);
    assert_eq!(delayed.play(mv("e5d6")), Ok(PlayResult::Rejected));
}

#[test]
fn promotion_flags_the_move_and_waits_for_a_piece() {
    let mut position = Position::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("FEN");
    let executed = position.execute(mv("b7b8"));
    assert!(executed.promotion_pending);
    assert_eq!(position.board.piece_on(1, 7), Piece::WhiteQueen);
    assert_eq!(position.side_to_move, Color::White);

    let mut session = session_from("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(
        session.play(mv("b7b8")),
        Ok(PlayResult::PromotionPending(square_of(1, 7)))
    );
    assert_eq!(session.play(mv("e1d1")), Err(ChessError::PromotionPending));
    assert_eq!(session.promote(PieceKind::Rook), Ok(GameOutcome::InProgress));
    assert_eq!(session.fen(), "1R2k3/8/8/8/8/8/8/4K3 b - - 0 1");
}

#[test]
fn knight_shuffle_draws_on_the_third_occurrence() {
    let mut session = GameSession::new_game();
    let shuffle = ["b1c3", "b8c6", "c3b1", "c6b8"];

    play_line(&mut session, &shuffle);
    assert_eq!(session.outcome(), GameOutcome::InProgress);

    play_line(&mut session, &shuffle[..3]);
    assert_eq!(session.outcome(), GameOutcome::InProgress);

    assert_eq!(
        session.play(mv(shuffle[3])),
        Ok(PlayResult::Completed(GameOutcome::ThreefoldRepetition))
    );
}

#[test]
fn halfmove_clock_counts_quiet_moves_and_resets_on_captures() {
    let mut session = GameSession::new_game();
    play_line(&mut session, &["g1f3", "b8c6", "f3g5"]);
    assert_eq!(session.halfmove_clock(), 3);
    play_line(&mut session, &["c6d4"]);
    assert_eq!(session.halfmove_clock(), 4);
    play_line(&mut session, &["g5f7"]);
    assert_eq!(session.halfmove_clock(), 0);
    play_line(&mut session, &["e8f7"]);
    assert_eq!(session.halfmove_clock(), 0);
    play_line(&mut session, &["b1c3"]);
    assert_eq!(session.halfmove_clock(), 1);
}

#[test]
fn pinned_piece_and_king_walk_into_check_are_rejected() {
    let mut session = session_from("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1");
    assert_eq!(session.play(mv("e2c3")), Ok(PlayResult::Rejected));
    let mut targets = session.legal_destinations(square_of(4, 0));
    targets.sort_unstable();
    assert_eq!(
        targets,
        vec![square_of(3, 0), square_of(5, 0), square_of(3, 1), square_of(5, 1)]
    );
}

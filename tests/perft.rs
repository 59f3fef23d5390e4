use chess_oracle::game_state::chess_types::Position;
use chess_oracle::move_validation::perft::{perft, perft_divide};

fn position(fen: &str) -> Position {
    Position::from_fen(fen).expect("FEN should parse")
}

#[test]
fn kiwipete_depth_two() {
    let game = position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let counts = perft(&game, 2);
    assert_eq!(counts.nodes, 2039);
    assert_eq!(counts.captures, 351);
    assert_eq!(counts.en_passant, 1);
    assert_eq!(counts.castles, 91);
    assert_eq!(counts.checks, 3);
}

#[test]
fn startpos_divide_after_e2e4() {
    let game = Position::new_game();
    let divided = perft_divide(&game, 3);
    let e2e4 = divided
        .iter()
        .find(|(mv, _)| mv.to_string() == "e2e4")
        .map(|&(_, nodes)| nodes);
    assert_eq!(e2e4, Some(600));
    assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<usize>(), 8902);
}

#[test]
fn position_three_counts_en_passant_and_checks() {
    let game = position("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    let counts = perft(&game, 2);
    assert_eq!(counts.nodes, 191);
    assert_eq!(counts.captures, 14);
    assert_eq!(counts.checks, 10);
}

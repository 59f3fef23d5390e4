use clap::Parser;
use tracing_subscriber::EnvFilter;

use chess_oracle::config::SessionConfig;
use chess_oracle::driver::text_driver::run_stdio_loop;
use chess_oracle::game_state::chess_rules::FIFTY_MOVE_LIMIT_HALF_MOVES;
use chess_oracle::game_state::chess_types::Color;

/// Two-player chess in the terminal with full rules enforcement.
#[derive(Debug, Parser)]
#[command(name = "chess_oracle", version, about)]
struct Args {
    /// Black moves first from the standard layout.
    #[arg(long)]
    black_first: bool,

    /// Start from this FEN instead of the standard layout.
    #[arg(long)]
    fen: Option<String>,

    /// Half-moves without capture or pawn move before a draw.
    #[arg(long, default_value_t = FIFTY_MOVE_LIMIT_HALF_MOVES)]
    fifty_move_limit: u16,

    /// Do not end the game on threefold repetition.
    #[arg(long)]
    no_repetition_draw: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        let side = if self.black_first {
            Color::Black
        } else {
            Color::White
        };
        let config = SessionConfig::default()
            .with_starting_side(side)
            .with_fifty_move_limit(self.fifty_move_limit)
            .with_repetition_draw(!self.no_repetition_draw);
        match &self.fen {
            Some(fen) => config.with_starting_fen(fen.clone()),
            None => config,
        }
    }
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run_stdio_loop(args.session_config()) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

//! Line-oriented text front-end for a two-player session.
//!
//! Reads one command per line, forwards it to a `GameSession` and prints the
//! board, the outcome or an error message. Commands:
//!
//! | command      | effect                                           |
//! |--------------|--------------------------------------------------|
//! | `e2e4`       | play a move in coordinate notation               |
//! | `moves e2`   | list the legal destinations of the piece on e2   |
//! | `promote n`  | choose the pending promotion piece and confirm   |
//! | `cycle [-]`  | step the promotion piece forward (or backward)   |
//! | `confirm`    | accept the current promotion piece               |
//! | `draw`       | both players agree to a draw                     |
//! | `fen`        | print the current position as FEN                |
//! | `board`      | print the board                                  |
//! | `new`        | start over with the same configuration           |
//! | `quit`       | leave                                            |

use std::io::{self, BufRead, Write};

use crate::config::SessionConfig;
use crate::errors::{ChessError, ChessResult};
use crate::session::game_over::GameOutcome;
use crate::session::game_session::{GameSession, PlayResult};
use crate::session::promotion::{promotion_kind_from_char, CycleDirection};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::long_algebraic::long_algebraic_to_move;
use crate::utils::render_game_state::render_position;

/// Why the console loop stopped early.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Session(#[from] ChessError),
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Runs the session on stdin and stdout until `quit` or end of input.
pub fn run_stdio_loop(config: SessionConfig) -> Result<(), DriverError> {
    let mut driver = TextDriver::new(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_command_loop(&mut driver, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_command_loop(driver: &mut TextDriver, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    driver.print_board(out)?;
    out.flush()?;
    for line in input.lines() {
        let quit = driver.handle_command(&line?, out)?;
        out.flush()?;
        if quit {
            break;
        }
    }
    Ok(())
}

struct TextDriver {
    session: GameSession,
}

impl TextDriver {
    fn new(config: SessionConfig) -> ChessResult<Self> {
        Ok(Self {
            session: GameSession::new(config)?,
        })
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "quit" | "exit" => return Ok(true),
            "board" => self.print_board(out)?,
            "fen" => writeln!(out, "{}", self.session.fen())?,
            "new" => match self.session.reset() {
                Ok(()) => self.print_board(out)?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            "draw" => match self.session.agree_draw() {
                Ok(outcome) => writeln!(out, "{}", outcome)?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            "moves" => self.handle_moves(parts.next().unwrap_or_default(), out)?,
            "cycle" => {
                let direction = match parts.next() {
                    Some("-") | Some("back") => CycleDirection::Backward,
                    _ => CycleDirection::Forward,
                };
                match self.session.cycle_promotion(direction) {
                    Ok(kind) => writeln!(out, "promotion piece: {:?}", kind)?,
                    Err(err) => writeln!(out, "error: {}", err)?,
                }
            }
            "confirm" => {
                let result = self.session.confirm_promotion();
                self.report_turn(result, out)?;
            }
            "promote" => {
                let Some(kind) = parts
                    .next()
                    .and_then(|token| token.chars().next())
                    .and_then(promotion_kind_from_char)
                else {
                    writeln!(out, "error: promote expects one of q, r, b, n")?;
                    return Ok(false);
                };
                let result = self.session.promote(kind);
                self.report_turn(result, out)?;
            }
            _ => self.handle_move(cmd, out)?,
        }

        Ok(false)
    }

    fn handle_moves(&self, square_text: &str, out: &mut impl Write) -> io::Result<()> {
        let square = match algebraic_to_square(square_text) {
            Ok(square) => square,
            Err(err) => return writeln!(out, "error: {}", err),
        };
        let targets: Vec<String> = self
            .session
            .legal_destinations(square)
            .into_iter()
            .filter_map(|target| square_to_algebraic(target).ok())
            .collect();
        if targets.is_empty() {
            writeln!(out, "no legal moves from {}", square_text)
        } else {
            writeln!(out, "{}", targets.join(" "))
        }
    }

    fn handle_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let mv = match long_algebraic_to_move(text) {
            Ok(mv) => mv,
            Err(_) => return writeln!(out, "unknown command '{}'", text),
        };

        match self.session.play(mv) {
            Ok(PlayResult::Rejected) => writeln!(out, "illegal move {}", mv),
            Ok(PlayResult::PromotionPending(_)) => {
                self.print_board(out)?;
                writeln!(out, "promotion: use cycle, confirm or promote <q|r|b|n>")
            }
            Ok(PlayResult::Completed(outcome)) => self.report_turn(Ok(outcome), out),
            Err(err) => writeln!(out, "error: {}", err),
        }
    }

    fn report_turn(&self, result: ChessResult<GameOutcome>, out: &mut impl Write) -> io::Result<()> {
        match result {
            Ok(outcome) => {
                self.print_board(out)?;
                if outcome.is_over() {
                    writeln!(out, "{}", outcome)?;
                } else if self.session.position().is_player_in_check(self.session.side_to_move()) {
                    writeln!(out, "check")?;
                }
                Ok(())
            }
            Err(err) => writeln!(out, "error: {}", err),
        }
    }

    fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_position(self.session.position()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Write};

    use super::{run_command_loop, TextDriver};
    use crate::config::SessionConfig;
    use crate::game_state::chess_types::Color;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run(driver: &mut TextDriver, line: &str) -> String {
        let mut out = Vec::new();
        driver
            .handle_command(line, &mut out)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("driver output is UTF-8")
    }

    #[test]
    fn moves_are_played_and_listed() {
        let mut driver = TextDriver::new(SessionConfig::default()).expect("default config");
        assert_eq!(run(&mut driver, "moves g1"), "f3 h3\n");
        assert!(run(&mut driver, "e2e4").ends_with("Black to move\n"));
        assert_eq!(driver.session.side_to_move(), Color::Black);
        assert_eq!(run(&mut driver, "e2e4"), "illegal move e2e4\n");
        assert_eq!(
            run(&mut driver, "fen"),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1\n"
        );
    }

    #[test]
    fn promotion_commands_resolve_the_pending_pawn() {
        let config = SessionConfig::default().with_starting_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let mut driver = TextDriver::new(config).expect("FEN should parse");
        assert!(run(&mut driver, "a7a8").contains("promotion:"));
        assert_eq!(run(&mut driver, "e1e2"), "error: a promotion is pending and must be resolved first\n");
        assert_eq!(run(&mut driver, "cycle"), "promotion piece: Bishop\n");
        assert_eq!(run(&mut driver, "cycle -"), "promotion piece: Queen\n");
        assert!(run(&mut driver, "promote n").ends_with("Black to move\n"));
    }

    #[test]
    fn draw_new_and_quit() {
        let mut driver = TextDriver::new(SessionConfig::default()).expect("default config");
        assert_eq!(run(&mut driver, "draw"), "draw by agreement\n");
        assert_eq!(run(&mut driver, "e2e4"), "error: the game is already over\n");
        assert!(run(&mut driver, "new").ends_with("White to move\n"));
        assert_eq!(run(&mut driver, "bogus"), "unknown command 'bogus'\n");

        let mut out = Vec::new();
        assert!(driver.handle_command("quit", &mut out).expect("no output"));
    }

    #[test]
    fn command_loop_stops_at_quit() {
        let mut driver = TextDriver::new(SessionConfig::default()).expect("default config");
        let mut out = Vec::new();
        run_command_loop(&mut driver, Cursor::new("e2e4\nquit\ne7e5\n"), &mut out)
            .expect("writing to a Vec cannot fail");
        assert_eq!(driver.session.side_to_move(), Color::Black);
        let text = String::from_utf8(out).expect("driver output is UTF-8");
        assert!(text.ends_with("Black to move\n"));
    }

    #[test]
    fn console_write_failure_is_reported() {
        let mut driver = TextDriver::new(SessionConfig::default()).expect("default config");
        let err = run_command_loop(&mut driver, Cursor::new("e2e4\n"), &mut ClosedPipe)
            .expect_err("a closed pipe must surface");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(driver.session.side_to_move(), Color::White);
    }
}

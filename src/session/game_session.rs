//! One game between two players sharing a board.
//!
//! `GameSession` owns the live `Position` and everything the rules engine
//! leaves to its caller: the fifty-move half-move clock, the repetition
//! sets, the pending promotion and the final outcome. Each accepted move
//! goes through `Position::is_legal` and then `Position::execute`. After the
//! turn passes the new position is classified in this order:
//!
//! 1. no legal move (checkmate or stalemate),
//! 2. third occurrence of the position,
//! 3. fifty-move limit reached.

use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::session::game_over::{classify_no_legal_move, GameOutcome};
use crate::session::promotion::{cycle_promotion_kind, ensure_promotion_kind, CycleDirection};
use crate::session::repetition::RepetitionTracker;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Result of offering a move to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayResult {
    /// The move is not legal; nothing changed.
    Rejected,
    /// The move was made and a pawn waits on this square for its promotion
    /// piece. The turn has not passed.
    PromotionPending(Square),
    /// The move was made and the turn passed.
    Completed(GameOutcome),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    position: Position,
    halfmove_clock: u16,
    fullmove_number: u16,
    repetition: RepetitionTracker,
    pending_promotion: Option<Square>,
    outcome: GameOutcome,
    history: Vec<Move>,
}

impl GameSession {
    /// Starts a game from `config`. Fails only on an unparsable starting FEN.
    pub fn new(config: SessionConfig) -> ChessResult<Self> {
        let (position, halfmove_clock, fullmove_number) = match &config.starting_fen {
            Some(fen) => {
                let parsed = parse_fen(fen)?;
                (parsed.position, parsed.halfmove_clock, parsed.fullmove_number)
            }
            None => (Position::new_game_with_side(config.starting_side), 0, 1),
        };

        let mut session = Self::from_position(position, config);
        session.halfmove_clock = halfmove_clock;
        session.fullmove_number = fullmove_number;
        // A FEN may describe a finished game.
        if let Some(outcome) = classify_no_legal_move(&session.position) {
            session.finish(outcome);
        }
        Ok(session)
    }

    /// Standard game, White to move.
    pub fn new_game() -> Self {
        Self::from_position(Position::new_game(), SessionConfig::default())
    }

    fn from_position(position: Position, config: SessionConfig) -> Self {
        let mut repetition = RepetitionTracker::new();
        repetition.record(&position);
        Self {
            config,
            position,
            halfmove_clock: 0,
            fullmove_number: 1,
            repetition,
            pending_promotion: None,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Starts over with the same configuration.
    pub fn reset(&mut self) -> ChessResult<()> {
        *self = Self::new(self.config.clone())?;
        debug!("session reset");
        Ok(())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Moves committed so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    pub fn fen(&self) -> String {
        generate_fen(&self.position, self.halfmove_clock, self.fullmove_number)
    }

    /// Squares the piece on `from` may move to. Empty once the game is over
    /// or while a promotion is pending.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        if self.outcome.is_over() || self.pending_promotion.is_some() {
            return Vec::new();
        }
        self.position.legal_destinations(from)
    }

    /// Offers `mv` for the side to move.
    ///
    /// An illegal move is an ordinary `Ok(PlayResult::Rejected)`. Errors are
    /// reserved for calling out of turn: after the game ended or while a
    /// promotion is still undecided.
    pub fn play(&mut self, mv: Move) -> ChessResult<PlayResult> {
        self.ensure_in_progress()?;
        if self.pending_promotion.is_some() {
            warn!(%mv, "move offered while a promotion is pending");
            return Err(ChessError::PromotionPending);
        }

        if !self.position.is_legal(mv) {
            return Ok(PlayResult::Rejected);
        }

        let executed = self.position.execute(mv);
        self.history.push(mv);
        debug!(%mv, kind = ?executed.kind, captured = ?executed.captured, "move committed");

        if executed.is_irreversible() {
            self.halfmove_clock = 0;
            self.repetition.clear();
            debug!("repetition history cleared");
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if executed.promotion_pending {
            self.pending_promotion = Some(mv.to());
            return Ok(PlayResult::PromotionPending(mv.to()));
        }

        Ok(PlayResult::Completed(self.complete_turn()))
    }

    /// Steps the pending promotion piece through queen, bishop, rook and
    /// knight and returns the new choice.
    pub fn cycle_promotion(&mut self, direction: CycleDirection) -> ChessResult<PieceKind> {
        let square = self.pending_promotion_square()?;
        let current = self
            .position
            .board
            .piece_at(square)
            .kind()
            .unwrap_or(PieceKind::Queen);
        let next = cycle_promotion_kind(current, direction);
        self.place_promotion_piece(square, next);
        Ok(next)
    }

    /// Replaces the pending promotion piece with `kind`.
    pub fn choose_promotion(&mut self, kind: PieceKind) -> ChessResult<()> {
        let square = self.pending_promotion_square()?;
        ensure_promotion_kind(kind)?;
        self.place_promotion_piece(square, kind);
        Ok(())
    }

    /// Accepts the piece currently on the promotion square and passes the
    /// turn.
    pub fn confirm_promotion(&mut self) -> ChessResult<GameOutcome> {
        let square = self.pending_promotion_square()?;
        self.pending_promotion = None;
        debug!(
            square,
            piece = ?self.position.board.piece_at(square),
            "promotion resolved"
        );
        Ok(self.complete_turn())
    }

    /// Convenience for `choose_promotion` followed by `confirm_promotion`.
    pub fn promote(&mut self, kind: PieceKind) -> ChessResult<GameOutcome> {
        self.choose_promotion(kind)?;
        self.confirm_promotion()
    }

    /// Both players agree to a draw. Allowed at any point of a running game.
    pub fn agree_draw(&mut self) -> ChessResult<GameOutcome> {
        self.ensure_in_progress()?;
        self.pending_promotion = None;
        self.finish(GameOutcome::Agreement);
        Ok(self.outcome)
    }

    fn ensure_in_progress(&self) -> ChessResult<()> {
        if self.outcome.is_over() {
            warn!(outcome = %self.outcome, "session operation after the game ended");
            return Err(ChessError::GameOver);
        }
        Ok(())
    }

    fn pending_promotion_square(&self) -> ChessResult<Square> {
        self.ensure_in_progress()?;
        self.pending_promotion.ok_or_else(|| {
            warn!("promotion operation without a pending promotion");
            ChessError::NoPromotionPending
        })
    }

    fn place_promotion_piece(&mut self, square: Square, kind: PieceKind) {
        let color = self.position.side_to_move;
        self.position.board.set(square, Piece::new(color, kind));
    }

    /// Passes the turn, records the new position and classifies it.
    fn complete_turn(&mut self) -> GameOutcome {
        if self.position.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.position.pass_turn();

        let third_occurrence = self.repetition.record(&self.position);

        let outcome = if let Some(outcome) = classify_no_legal_move(&self.position) {
            outcome
        } else if third_occurrence && self.config.repetition_draw {
            GameOutcome::ThreefoldRepetition
        } else if self.halfmove_clock >= self.config.fifty_move_limit {
            GameOutcome::FiftyMoveRule
        } else {
            GameOutcome::InProgress
        };

        if outcome.is_over() {
            self.finish(outcome);
        }
        outcome
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.outcome = outcome;
        info!(
            %outcome,
            moves = self.history.len(),
            fen = %self.fen(),
            "game over"
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new_game()
    }
}

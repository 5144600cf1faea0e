//! Game session controller.
//!
//! `GameSession` owns the board, the clock, the selection and the move
//! history of one game. Hosts feed it square clicks and periodic ticks, each
//! carrying the current wall-clock reading, and read back a
//! [`SessionSnapshot`] to redraw. Every input is handled to completion before
//! the next one; nothing here blocks or spawns.
//!
//! Phases: awaiting selection, piece selected, terminal. A terminal game
//! ignores clicks until `reset`.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::clock::chess_clock::{format_clock, ChessClock};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::{evaluate_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_filter::{is_legal, legal_targets};
use crate::session::results::ResultSink;
use crate::session::snapshot::{Highlight, SessionPhase, SessionSnapshot};

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened: game over, or a click on an empty or enemy square
    /// with nothing selected.
    Ignored,
    Selected(Square),
    Deselected,
    Moved { notation: String, status: GameStatus },
    /// The destination was not legal; the selection was cleared.
    Rejected,
}

#[derive(Debug)]
pub struct GameSession<S: ResultSink> {
    budget_secs: u32,
    board: Board,
    current_player: Color,
    selection: Option<Square>,
    highlights: Vec<Square>,
    history: Vec<String>,
    status: GameStatus,
    clock: ChessClock,
    sink: S,
    result_reported: bool,
}

impl<S: ResultSink> GameSession<S> {
    /// Standard starting position with White to move and White's clock
    /// running from `now`.
    pub fn new(sink: S, budget_secs: u32, now: DateTime<Utc>) -> Self {
        Self::from_position(sink, Board::initial(), Color::White, budget_secs, now)
    }

    /// Start from an arbitrary position. `reset` still returns to the
    /// standard starting position.
    pub fn from_position(
        sink: S,
        board: Board,
        to_move: Color,
        budget_secs: u32,
        now: DateTime<Utc>,
    ) -> Self {
        let mut board = board;
        let status = evaluate_status(&mut board, to_move);
        let mut clock = ChessClock::new(budget_secs);
        if !status.is_terminal() {
            clock.start(to_move, now);
        }

        Self {
            budget_secs,
            board,
            current_player: to_move,
            selection: None,
            highlights: Vec::new(),
            history: Vec::new(),
            status,
            clock,
            sink,
            result_reported: status.is_terminal(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[inline]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Legal destinations of the current selection.
    #[inline]
    pub fn highlights(&self) -> &[Square] {
        &self.highlights
    }

    #[inline]
    pub fn clock(&self) -> &ChessClock {
        &self.clock
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn phase(&self) -> SessionPhase {
        if self.status.is_terminal() {
            SessionPhase::Terminal
        } else if self.selection.is_some() {
            SessionPhase::PieceSelected
        } else {
            SessionPhase::AwaitingSelection
        }
    }

    /// Handle a click on `square`. The clock is settled up to `now` first,
    /// so a click that arrives after the mover's time ran out is ignored.
    pub fn click(&mut self, square: Square, now: DateTime<Utc>) -> ClickOutcome {
        self.tick(now);
        if self.status.is_terminal() {
            return ClickOutcome::Ignored;
        }

        if self.selection == Some(square) {
            self.clear_selection();
            debug!(square = %square, "deselected");
            return ClickOutcome::Deselected;
        }

        if self
            .board
            .get(square)
            .is_some_and(|piece| piece.color == self.current_player)
        {
            self.select(square);
            return ClickOutcome::Selected(square);
        }

        let Some(from) = self.selection else {
            return ClickOutcome::Ignored;
        };
        self.clear_selection();

        if !is_legal(&mut self.board, from, square, self.current_player) {
            debug!(from = %from, to = %square, "move rejected");
            return ClickOutcome::Rejected;
        }

        self.play(Move::new(from, square), now)
    }

    /// Select `from` and click `to` in one call. Anything other than a
    /// completed move leaves nothing selected.
    pub fn try_move(&mut self, from: Square, to: Square, now: DateTime<Utc>) -> ClickOutcome {
        self.tick(now);
        if self.status.is_terminal() {
            return ClickOutcome::Ignored;
        }

        self.clear_selection();
        if self.click(from, now) != ClickOutcome::Selected(from) {
            self.clear_selection();
            return ClickOutcome::Rejected;
        }

        match self.click(to, now) {
            outcome @ ClickOutcome::Moved { .. } => outcome,
            _ => {
                self.clear_selection();
                ClickOutcome::Rejected
            }
        }
    }

    /// Charge the running clock up to `now`. Returns the new status when
    /// this tick flagged a side.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<GameStatus> {
        if self.status.is_terminal() {
            return None;
        }

        let flagged = self.clock.tick(now)?;
        self.status = GameStatus::Timeout {
            winner: flagged.opposite(),
        };
        self.clear_selection();
        self.finish_if_terminal();
        Some(self.status)
    }

    /// Discard the current game and start over from the standard position
    /// with fresh clocks, White's running from `now`.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.board = Board::initial();
        self.current_player = Color::White;
        self.selection = None;
        self.highlights.clear();
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.clock = ChessClock::new(self.budget_secs);
        self.clock.start(Color::White, now);
        self.result_reported = false;
        info!("game reset");
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let highlights = self
            .highlights
            .iter()
            .map(|&square| Highlight {
                square,
                capture: self.board.get(square).is_some(),
            })
            .collect();

        let checked_king = match self.status {
            GameStatus::Check | GameStatus::Checkmate { .. } => {
                self.board.king_square(self.current_player)
            }
            _ => None,
        };

        let urgency = if self.status.is_terminal() {
            None
        } else {
            self.clock.running().map(|color| self.clock.urgency(color))
        };

        SessionSnapshot {
            board: *self.board.rows(),
            selected: self.selection,
            highlights,
            checked_king,
            current_player: self.current_player,
            phase: self.phase(),
            status: self.status,
            status_text: self.status.status_text(),
            white_time: format_clock(self.clock.remaining_secs(Color::White)),
            black_time: format_clock(self.clock.remaining_secs(Color::Black)),
            active_clock: self.clock.running(),
            urgency,
            move_list: self
                .history
                .iter()
                .enumerate()
                .map(|(i, notation)| format!("{}. {}", i + 1, notation))
                .collect(),
        }
    }

    fn select(&mut self, square: Square) {
        self.selection = Some(square);
        self.highlights = legal_targets(&mut self.board, square);
        debug!(square = %square, targets = self.highlights.len(), "selected");
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.highlights.clear();
    }

    fn play(&mut self, mv: Move, now: DateTime<Utc>) -> ClickOutcome {
        let Some(applied) = apply_move(&mut self.board, mv) else {
            return ClickOutcome::Rejected;
        };

        self.history.push(applied.notation.clone());
        self.current_player = self.current_player.opposite();
        self.clock.hand_over(self.current_player, now);
        self.status = evaluate_status(&mut self.board, self.current_player);

        debug!(
            notation = %applied.notation,
            promoted = applied.promoted,
            status = ?self.status,
            "move applied"
        );

        self.finish_if_terminal();
        ClickOutcome::Moved {
            notation: applied.notation,
            status: self.status,
        }
    }

    fn finish_if_terminal(&mut self) {
        if !self.status.is_terminal() {
            return;
        }

        self.clock.stop();
        self.clear_selection();

        if self.result_reported {
            return;
        }
        self.result_reported = true;

        let Some(winner) = self.status.winner() else {
            info!(moves = self.history.len(), "game drawn by stalemate");
            return;
        };

        info!(
            winner = winner.name(),
            status = ?self.status,
            moves = self.history.len(),
            "game over"
        );
        if let Err(e) = self.sink.report_winner(winner) {
            warn!("failed to record game result: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoreError;
    use crate::utils::algebraic::algebraic_to_square;

    #[derive(Debug, Default)]
    struct RecordingSink {
        winners: Vec<Color>,
    }

    impl ResultSink for RecordingSink {
        fn report_winner(&mut self, winner: Color) -> Result<(), StoreError> {
            self.winners.push(winner);
            Ok(())
        }
    }

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).expect("timestamp should be in range")
    }

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn selection_state_machine() {
        let mut session = GameSession::new(RecordingSink::default(), 600, at(0));

        assert_eq!(session.click(sq("e4"), at(0)), ClickOutcome::Ignored);
        assert_eq!(session.click(sq("e7"), at(0)), ClickOutcome::Ignored);

        assert_eq!(session.click(sq("e2"), at(0)), ClickOutcome::Selected(sq("e2")));
        assert_eq!(session.phase(), SessionPhase::PieceSelected);
        assert_eq!(session.highlights().len(), 2);

        assert_eq!(session.click(sq("g1"), at(0)), ClickOutcome::Selected(sq("g1")));
        assert_eq!(session.click(sq("g1"), at(0)), ClickOutcome::Deselected);
        assert_eq!(session.phase(), SessionPhase::AwaitingSelection);
        assert!(session.highlights().is_empty());
    }

    #[test]
    fn illegal_destination_clears_selection_without_mutation() {
        let mut session = GameSession::new(RecordingSink::default(), 600, at(0));
        session.click(sq("e2"), at(0));

        assert_eq!(session.click(sq("e5"), at(0)), ClickOutcome::Rejected);
        assert_eq!(session.selection(), None);
        assert_eq!(session.board(), &Board::initial());
        assert!(session.history().is_empty());
        assert_eq!(session.current_player(), Color::White);
    }

    #[test]
    fn legal_move_flips_turn_and_clocks() {
        let mut session = GameSession::new(RecordingSink::default(), 600, at(0));
        session.click(sq("e2"), at(2_000));
        let outcome = session.click(sq("e4"), at(3_400));

        assert_eq!(
            outcome,
            ClickOutcome::Moved {
                notation: "e2e4".to_owned(),
                status: GameStatus::InProgress,
            }
        );
        assert_eq!(session.current_player(), Color::Black);
        assert_eq!(session.clock().running(), Some(Color::Black));
        assert_eq!(session.clock().remaining_secs(Color::White), 597);
        assert_eq!(session.clock().remaining_secs(Color::Black), 600);
    }

    #[test]
    fn snapshot_reports_highlights_and_times() {
        let mut session = GameSession::new(RecordingSink::default(), 600, at(0));
        session.click(sq("b1"), at(61_000));
        let snapshot = session.snapshot();

        assert_eq!(snapshot.selected, Some(sq("b1")));
        assert_eq!(snapshot.highlights.len(), 2);
        assert!(snapshot.highlights.iter().all(|h| !h.capture));
        assert_eq!(snapshot.white_time, "08:59");
        assert_eq!(snapshot.black_time, "10:00");
        assert_eq!(snapshot.active_clock, Some(Color::White));
        assert_eq!(snapshot.phase, SessionPhase::PieceSelected);
        assert!(snapshot.move_list.is_empty());
    }

    #[test]
    fn timeout_reports_other_side_once() {
        let mut session = GameSession::new(RecordingSink::default(), 5, at(0));

        assert_eq!(session.tick(at(4_900)), None);
        assert_eq!(
            session.tick(at(5_000)),
            Some(GameStatus::Timeout { winner: Color::Black })
        );
        assert_eq!(session.tick(at(9_000)), None);
        assert_eq!(session.click(sq("e2"), at(9_000)), ClickOutcome::Ignored);
        assert_eq!(session.sink().winners, vec![Color::Black]);
        assert_eq!(session.clock().remaining_secs(Color::Black), 5);
        assert_eq!(session.snapshot().urgency, None);
    }

    #[test]
    fn try_move_rejects_and_clears_on_bad_input() {
        let mut session = GameSession::new(RecordingSink::default(), 600, at(0));
        assert_eq!(session.try_move(sq("e7"), sq("e5"), at(0)), ClickOutcome::Rejected);
        assert_eq!(session.try_move(sq("e2"), sq("d2"), at(0)), ClickOutcome::Rejected);
        assert_eq!(session.selection(), None);
        assert!(matches!(
            session.try_move(sq("e2"), sq("e4"), at(0)),
            ClickOutcome::Moved { .. }
        ));
    }
}

//! Contract between the game session and whoever records results.

use crate::errors::StoreError;
use crate::game_state::chess_types::Color;

/// Outcome from the authenticated user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Win,
    Loss,
}

impl ResultKind {
    /// The human always plays White: a White win is the user's win and a
    /// Black win is the user's loss.
    pub const fn for_winner(winner: Color) -> Self {
        match winner {
            Color::White => ResultKind::Win,
            Color::Black => ResultKind::Loss,
        }
    }
}

/// Receives the winning color once per decisive game. Draws are never
/// reported.
pub trait ResultSink {
    fn report_winner(&mut self, winner: Color) -> Result<(), StoreError>;
}

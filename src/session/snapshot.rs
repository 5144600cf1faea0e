//! Read-only view of a session for whatever draws it.

use serde::Serialize;

use crate::clock::chess_clock::ClockUrgency;
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::GameStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    AwaitingSelection,
    PieceSelected,
    Terminal,
}

/// A legal destination of the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub square: Square,
    pub capture: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub board: [[Option<Piece>; 8]; 8],
    pub selected: Option<Square>,
    pub highlights: Vec<Highlight>,
    /// King square of the side to move while it is in check.
    pub checked_king: Option<Square>,
    pub current_player: Color,
    pub phase: SessionPhase,
    pub status: GameStatus,
    pub status_text: String,
    pub white_time: String,
    pub black_time: String,
    pub active_clock: Option<Color>,
    /// Urgency of the running side only; `None` once the game is over.
    pub urgency: Option<ClockUrgency>,
    /// Numbered entries, e.g. `1. e2e4`.
    pub move_list: Vec<String>,
}

//! Check / terminal-state classification.

use serde::Serialize;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_filter::legal_targets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate { winner: Color },
    Stalemate,
    Timeout { winner: Color },
}

impl GameStatus {
    /// Checkmate, stalemate and timeout end the game until reset.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::Timeout { .. }
        )
    }

    /// Winner of a decisive result. Stalemate is a draw and has none.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::Timeout { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn status_text(self) -> String {
        match self {
            GameStatus::InProgress => String::new(),
            GameStatus::Check => "Check!".to_owned(),
            GameStatus::Checkmate { winner } => format!("Checkmate! {} wins!", winner.name()),
            GameStatus::Stalemate => "Stalemate! Draw".to_owned(),
            GameStatus::Timeout { winner } => format!("Time out! {} wins!", winner.name()),
        }
    }
}

pub fn has_any_legal_move(board: &mut Board, color: Color) -> bool {
    let origins: Vec<Square> = board.pieces_of(color).map(|(sq, _)| sq).collect();
    origins
        .into_iter()
        .any(|from| !legal_targets(board, from).is_empty())
}

/// Classify the position for the side about to move. Clock expiry is not
/// visible here; the session layers timeout on top.
pub fn evaluate_status(board: &mut Board, to_move: Color) -> GameStatus {
    let in_check = is_in_check(board, to_move);
    let has_moves = has_any_legal_move(board, to_move);

    match (in_check, has_moves) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate {
            winner: to_move.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::InProgress,
    }
}

//! Crate root module declarations for the solo chess game.
//!
//! Exposes the board model, per-piece movement rules, legality and status
//! evaluation, the chess clock, the game session controller, the local
//! account/statistics collaborators, and text utilities, so the terminal
//! host, tests and benchmarks can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_notation;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod perft;
    pub mod pseudo_legal;
}

pub mod clock {
    pub mod chess_clock;
}

pub mod session {
    pub mod game_session;
    pub mod results;
    pub mod snapshot;
}

pub mod accounts {
    pub mod account_store;
    pub mod key_value_store;
    pub mod password;
    pub mod stats_store;
}

pub mod config;
pub mod errors;

pub mod utils {
    pub mod algebraic;
    pub mod placement;
    pub mod render_game_state;
}

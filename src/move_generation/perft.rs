//! Node counting over the legal-move tree.
//!
//! Walks every legal line to a fixed depth and tallies leaf statistics. The
//! counts validate the generator against published reference numbers for
//! positions where castling, en passant and under-promotion cannot occur.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::has_any_legal_move;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_filter::legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, to_move: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = board.clone();
    let moves = legal_moves(&mut scratch, to_move);
    let opponent = to_move.opposite();
    let mut total = PerftCounts::default();

    for mv in moves {
        let mut next = board.clone();
        let Some(applied) = apply_move(&mut next, mv) else {
            continue;
        };

        if depth > 1 {
            total.merge(perft(&next, opponent, depth - 1));
            continue;
        }

        total.nodes += 1;
        if applied.captured_piece.is_some() {
            total.captures += 1;
        }
        if applied.promoted {
            total.promotions += 1;
        }
        if is_in_check(&next, opponent) {
            total.checks += 1;
            if !has_any_legal_move(&mut next, opponent) {
                total.checkmates += 1;
            }
        }
    }

    total
}

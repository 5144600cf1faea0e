use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_shared::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// One step in any direction. No castling.
#[inline]
pub fn king_targets(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    step_targets(board, from, color, &KING_OFFSETS, out);
}

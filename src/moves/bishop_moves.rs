use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_shared::trace_rays;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn bishop_targets(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    trace_rays(board, from, color, &BISHOP_DIRECTIONS, out);
}

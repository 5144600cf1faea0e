use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_shared::trace_rays;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

#[inline]
pub fn queen_targets(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    trace_rays(board, from, color, &ROOK_DIRECTIONS, out);
    trace_rays(board, from, color, &BISHOP_DIRECTIONS, out);
}

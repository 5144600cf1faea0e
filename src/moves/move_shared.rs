//! Ray walking and fixed-offset stepping shared by the piece movers.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Whether a piece of `color` may land on `square`: empty or enemy-held.
#[inline]
pub fn is_open_for(board: &Board, square: Square, color: Color) -> bool {
    match board.get(square) {
        None => true,
        Some(piece) => piece.color != color,
    }
}

/// Walk one direction from `from`, pushing every empty square and stopping
/// at the edge or the first occupied square (kept only if it is an enemy).
pub fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    (d_row, d_col): (i8, i8),
    out: &mut Vec<Square>,
) {
    let mut cursor = from;
    while let Some(target) = cursor.offset(d_row, d_col) {
        match board.get(target) {
            None => out.push(target),
            Some(piece) => {
                if piece.color != color {
                    out.push(target);
                }
                break;
            }
        }
        cursor = target;
    }
}

pub fn trace_rays(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &direction in directions {
        trace_ray(board, from, color, direction, out);
    }
}

/// Single steps by each offset, kept when on the board and open for `color`.
pub fn step_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = from.offset(d_row, d_col) {
            if is_open_for(board, target, color) {
                out.push(target);
            }
        }
    }
}

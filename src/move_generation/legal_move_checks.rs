use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal::push_piece_targets;

/// Whether any piece of `attacker_color` has `square` among its
/// pseudo-legal destinations.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut targets = Vec::with_capacity(28);
    for (from, piece) in board.pieces_of(attacker_color) {
        targets.clear();
        push_piece_targets(board, from, piece, &mut targets);
        if targets.contains(&square) {
            return true;
        }
    }
    false
}

/// Whether `color`'s king is attacked. Uses unfiltered enemy destinations;
/// filtering them for legality would recurse back into check detection.
/// A board without a king for `color` is never in check.
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

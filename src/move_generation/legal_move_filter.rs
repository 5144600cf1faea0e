//! Legality filter layered over the pseudo-legal generator.
//!
//! A candidate is legal when it matches the piece's raw movement pattern and
//! does not leave the mover's king in check. The check test is done by
//! relocating the piece in place, scanning for check, and restoring the
//! grid from the undo record. Probes never promote and never touch history
//! or clocks.
//!
//! Cost: every probe runs a full enemy scan, so enumerating all legal moves
//! for a side is roughly pieces x moves x pieces x moves. That is fine on an
//! 8x8 board and nothing is cached between calls.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::pseudo_legal::push_piece_targets;

/// Simulate `mv` and report whether `mover`'s king would be in check.
/// The board is restored exactly before returning.
pub fn leaves_king_in_check(board: &mut Board, mv: Move, mover: Color) -> bool {
    let undo = board.make_unchecked(mv);
    let exposed = is_in_check(board, mover);
    board.unmake(undo);
    exposed
}

pub fn is_legal(board: &mut Board, from: Square, to: Square, mover: Color) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    if piece.color != mover {
        return false;
    }
    if board.get(to).is_some_and(|target| target.color == mover) {
        return false;
    }

    let mut targets = Vec::with_capacity(28);
    push_piece_targets(board, from, piece, &mut targets);
    if !targets.contains(&to) {
        return false;
    }

    !leaves_king_in_check(board, Move::new(from, to), mover)
}

/// Legal destinations for whatever stands on `from`.
pub fn legal_targets(board: &mut Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut targets = Vec::with_capacity(28);
    push_piece_targets(board, from, piece, &mut targets);
    targets.retain(|&to| !leaves_king_in_check(board, Move::new(from, to), piece.color));
    targets
}

pub fn legal_moves(board: &mut Board, color: Color) -> Vec<Move> {
    let origins: Vec<Square> = board.pieces_of(color).map(|(sq, _)| sq).collect();
    let mut moves = Vec::with_capacity(64);
    for from in origins {
        moves.extend(legal_targets(board, from).into_iter().map(|to| Move::new(from, to)));
    }
    moves
}

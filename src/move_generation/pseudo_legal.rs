//! Pseudo-legal destination generation.
//!
//! Dispatches on the piece standing on the source square and returns every
//! square its raw movement pattern reaches. Whether the move would leave the
//! mover's own king in check is not considered here; see
//! `legal_move_filter` for that.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_targets;
use crate::moves::queen_moves::queen_targets;
use crate::moves::rook_moves::rook_targets;

/// Pseudo-legal destinations for the piece on `from`. Empty when the square
/// is empty.
pub fn pseudo_legal_targets(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    if let Some(piece) = board.get(from) {
        push_piece_targets(board, from, piece, &mut out);
    }
    out
}

pub fn push_piece_targets(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => pawn_targets(board, from, piece.color, out),
        PieceKind::Knight => knight_targets(board, from, piece.color, out),
        PieceKind::Bishop => bishop_targets(board, from, piece.color, out),
        PieceKind::Rook => rook_targets(board, from, piece.color, out),
        PieceKind::Queen => queen_targets(board, from, piece.color, out),
        PieceKind::King => king_targets(board, from, piece.color, out),
    }
}

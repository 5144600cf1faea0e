use crate::game_state::chess_types::*;

/// Single undo record for `Board::make_unchecked` / `Board::unmake`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: Option<Piece>,
    pub captured_piece: Option<Piece>,
}

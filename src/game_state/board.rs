//! Mailbox board model.
//!
//! `Board` is a plain 8x8 grid of optional pieces with no legality knowledge.
//! Besides `get`/`set` it offers a make/unmake pair that relocates a piece
//! without promotion so legality probes can restore the grid exactly.

use serde::Serialize;

use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting position: Black on rows 0-1, White on rows 6-7.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().copied().enumerate() {
            board.cells[0][col] = Some(Piece::new(kind, Color::Black));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Overwrite a square, returning whatever stood there before.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.cells[square.row() as usize][square.col() as usize],
            piece,
        )
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Relocate whatever stands on `mv.from` to `mv.to` with no rule checks
    /// and no promotion. The returned record restores the grid via `unmake`.
    pub fn make_unchecked(&mut self, mv: Move) -> UndoState {
        let moved_piece = self.set(mv.from, None);
        let captured_piece = self.set(mv.to, moved_piece);
        UndoState {
            mv,
            moved_piece,
            captured_piece,
        }
    }

    pub fn unmake(&mut self, undo: UndoState) {
        self.set(undo.mv.to, undo.captured_piece);
        self.set(undo.mv.from, undo.moved_piece);
    }

    /// Occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Rows flipped and colors swapped: the same position seen from the
    /// other side of the table.
    pub fn mirrored(&self) -> Self {
        let mut out = Self::empty();
        for (sq, piece) in self.pieces() {
            if let Some(target) = Square::new(7 - sq.row(), sq.col()) {
                out.set(target, Some(Piece::new(piece.kind, piece.color.opposite())));
            }
        }
        out
    }

    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }
}

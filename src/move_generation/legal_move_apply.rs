use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_notation::move_notation;
use crate::moves::pawn_moves::promotion_row;

/// Result of permanently applying a move to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub promoted: bool,
    pub notation: String,
}

/// Move the piece on `mv.from` to `mv.to`, capturing whatever stood there.
/// A pawn that lands on its far row is replaced by a queen of its color.
/// Returns `None` and leaves the board untouched when `mv.from` is empty.
///
/// Legality is the caller's concern; see `legal_move_filter::is_legal`.
pub fn apply_move(board: &mut Board, mv: Move) -> Option<AppliedMove> {
    let moved_piece = board.get(mv.from)?;

    board.set(mv.from, None);
    let promoted =
        moved_piece.kind == PieceKind::Pawn && mv.to.row() == promotion_row(moved_piece.color);
    let placed = if promoted {
        Piece::new(PieceKind::Queen, moved_piece.color)
    } else {
        moved_piece
    };
    let captured_piece = board.set(mv.to, Some(placed));

    Some(AppliedMove {
        mv,
        moved_piece,
        captured_piece,
        promoted,
        notation: move_notation(mv.from, mv.to, captured_piece.is_some()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::placement::parse_placement;

    fn mv(from: &str, to: &str) -> Move {
        Move::new(
            algebraic_to_square(from).expect("from should parse"),
            algebraic_to_square(to).expect("to should parse"),
        )
    }

    #[test]
    fn capture_matches_independently_built_board() {
        let mut board = parse_placement("4k3/8/8/3p4/4P3/8/8/4K3").expect("placement should parse");
        let applied = apply_move(&mut board, mv("e4", "d5")).expect("e4 holds a pawn");

        let expected = parse_placement("4k3/8/8/3P4/8/8/8/4K3").expect("placement should parse");
        assert_eq!(board, expected);
        assert_eq!(applied.notation, "e4xd5");
        assert_eq!(applied.captured_piece, Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(!applied.promoted);
    }

    #[test]
    fn pawn_on_far_row_becomes_queen() {
        let mut board = parse_placement("1n2k3/P7/8/8/8/8/8/4K3").expect("placement should parse");
        let applied = apply_move(&mut board, mv("a7", "b8")).expect("a7 holds a pawn");

        let expected = parse_placement("1Q2k3/8/8/8/8/8/8/4K3").expect("placement should parse");
        assert_eq!(board, expected);
        assert!(applied.promoted);
        assert_eq!(applied.notation, "a7xb8");
    }

    #[test]
    fn black_pawn_promotes_on_row_seven() {
        let mut board = parse_placement("4k3/8/8/8/8/8/6p1/K7").expect("placement should parse");
        apply_move(&mut board, mv("g2", "g1")).expect("g2 holds a pawn");
        let g1 = algebraic_to_square("g1").expect("g1 should parse");
        assert_eq!(board.get(g1), Some(Piece::new(PieceKind::Queen, Color::Black)));
    }

    #[test]
    fn empty_source_leaves_board_untouched() {
        let mut board = Board::initial();
        assert!(apply_move(&mut board, mv("e4", "e5")).is_none());
        assert_eq!(board, Board::initial());
    }
}

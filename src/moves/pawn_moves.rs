use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Row delta of a forward pawn step. White advances toward row 0.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Forward one onto an empty square, forward two from the start row when
/// both squares are empty, and diagonal one only onto an enemy piece.
/// No en passant.
pub fn pawn_targets(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = pawn_direction(color);

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);

            if from.row() == pawn_start_row(color) {
                if let Some(two_step) = one_step.offset(dir, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(target) = from.offset(dir, d_col) else {
            continue;
        };
        if let Some(piece) = board.get(target) {
            if piece.color != color {
                out.push(target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_targets;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Square};
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::placement::parse_placement;

    fn sorted_targets(board: &Board, from: &str, color: Color) -> Vec<Square> {
        let from = algebraic_to_square(from).expect("square should parse");
        let mut out = Vec::new();
        pawn_targets(board, from, color, &mut out);
        out.sort();
        out
    }

    fn squares(names: &[&str]) -> Vec<Square> {
        let mut out: Vec<Square> = names
            .iter()
            .map(|name| algebraic_to_square(name).expect("square should parse"))
            .collect();
        out.sort();
        out
    }

    #[test]
    fn white_pawn_from_start_has_single_and_double_step() {
        let board = Board::initial();
        assert_eq!(sorted_targets(&board, "e2", Color::White), squares(&["e3", "e4"]));
    }

    #[test]
    fn black_pawn_from_start_moves_down_the_board() {
        let board = Board::initial();
        assert_eq!(sorted_targets(&board, "d7", Color::Black), squares(&["d6", "d5"]));
    }

    #[test]
    fn blocked_pawn_cannot_double_step() {
        let board = parse_placement("8/8/8/8/8/4n3/4P3/8").expect("placement should parse");
        assert!(sorted_targets(&board, "e2", Color::White).is_empty());
    }

    #[test]
    fn pawn_captures_only_diagonal_enemies() {
        let board = parse_placement("8/8/8/3p1P2/4P3/8/8/8").expect("placement should parse");
        assert_eq!(sorted_targets(&board, "e4", Color::White), squares(&["d5", "e5"]));
    }

    #[test]
    fn pawn_off_start_row_has_no_double_step() {
        let board = parse_placement("8/8/8/8/8/4P3/8/8").expect("placement should parse");
        assert_eq!(sorted_targets(&board, "e3", Color::White), squares(&["e4"]));
    }
}

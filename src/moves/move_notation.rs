//! Move history notation: `file rank [x] file rank`, e.g. `e2e4`, `e4xd5`.

use crate::game_state::chess_types::Square;
use crate::utils::algebraic::square_to_algebraic;

pub const CAPTURE_MARKER: char = 'x';

pub fn move_notation(from: Square, to: Square, is_capture: bool) -> String {
    let mut out = square_to_algebraic(from);
    if is_capture {
        out.push(CAPTURE_MARKER);
    }
    out.push_str(&square_to_algebraic(to));
    out
}

#[cfg(test)]
mod tests {
    use super::move_notation;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn quiet_and_capture_notation() {
        let e2 = algebraic_to_square("e2").expect("e2 should parse");
        let e4 = algebraic_to_square("e4").expect("e4 should parse");
        let d5 = algebraic_to_square("d5").expect("d5 should parse");
        assert_eq!(move_notation(e2, e4, false), "e2e4");
        assert_eq!(move_notation(e4, d5, true), "e4xd5");
    }
}

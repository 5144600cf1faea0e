//! FEN piece-placement parsing and generation.
//!
//! Only the first FEN field is used. The first rank group is rank 8, which
//! is row 0 of the board.

use crate::errors::PlacementError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn parse_placement(placement: &str) -> Result<Board, PlacementError> {
    let ranks: Vec<&str> = placement.trim().split('/').collect();
    if ranks.len() != 8 {
        return Err(PlacementError::WrongRankCount(ranks.len()));
    }

    let mut board = Board::empty();

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(PlacementError::InvalidEmptyCount(ch));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_char(ch).ok_or(PlacementError::InvalidPiece(ch))?;
            let square = Square::new(row as u8, col as u8)
                .ok_or(PlacementError::WrongFileCount { rank: 8 - row })?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(PlacementError::WrongFileCount { rank: 8 - row });
        }
    }

    Ok(board)
}

pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for (row, cells) in board.rows().iter().enumerate() {
        let mut empty = 0u8;
        for cell in cells {
            match cell {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece_to_char(*piece));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(kind, color))
}

pub fn piece_to_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_PLACEMENT;

    #[test]
    fn starting_placement_matches_initial_board() {
        let board = parse_placement(STARTING_PLACEMENT).expect("starting placement should parse");
        assert_eq!(board, Board::initial());
        assert_eq!(generate_placement(&board), STARTING_PLACEMENT);
    }

    #[test]
    fn sparse_placement_is_regenerated_verbatim() {
        let placement = "7k/5K2/8/6Q1/8/8/8/8";
        let board = parse_placement(placement).expect("placement should parse");
        assert_eq!(board.pieces().count(), 3);
        assert_eq!(generate_placement(&board), placement);
    }

    #[test]
    fn rejects_bad_placements() {
        assert_eq!(parse_placement("8/8/8"), Err(PlacementError::WrongRankCount(3)));
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/7"),
            Err(PlacementError::WrongFileCount { rank: 1 })
        );
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/7z"),
            Err(PlacementError::InvalidPiece('z'))
        );
        assert_eq!(
            parse_placement("9/8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidEmptyCount('9'))
        );
    }
}

//! Terminal-oriented Unicode board renderer.
//!
//! Draws a session snapshot for the text host: rank 8 on top, the selected
//! square in brackets, empty highlight targets as `*`, capture targets with
//! the captured piece wrapped in parentheses.

use crate::game_state::chess_types::*;
use crate::session::snapshot::SessionSnapshot;

pub fn render_snapshot(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();

    out.push_str("    a  b  c  d  e  f  g  h\n");

    for (row, cells) in snapshot.board.iter().enumerate() {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for (col, cell) in cells.iter().enumerate() {
            let Some(square) = Square::new(row as u8, col as u8) else {
                continue;
            };
            let glyph = match cell {
                Some(piece) => piece_to_unicode(*piece),
                None => '·',
            };
            let highlighted = snapshot.highlights.iter().any(|h| h.square == square);

            if snapshot.selected == Some(square) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else if highlighted && cell.is_some() {
                out.push('(');
                out.push(glyph);
                out.push(')');
            } else if highlighted {
                out.push_str(" * ");
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("    a  b  c  d  e  f  g  h\n");
    out.push_str(&format!(
        "White {}  Black {}  |  {} to move",
        snapshot.white_time,
        snapshot.black_time,
        snapshot.current_player.name()
    ));
    if !snapshot.status_text.is_empty() {
        out.push_str("  |  ");
        out.push_str(&snapshot.status_text);
    }

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

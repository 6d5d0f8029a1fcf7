//! Platform abstraction layer
//!
//! What a presentation layer needs to draw the board and drive the session:
//! - `grid_view`: one entry per piece, with its kind label and drawing origin
//! - `web` (wasm32): JavaScript binding around [`Session`]

#[cfg(target_arch = "wasm32")]
pub mod web;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Session;

/// A piece as the presentation draws it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceView {
    pub row: i32,
    pub col: i32,
    /// Kind label, used as the element's class
    pub kind: String,
    /// Top-left corner of the piece's 2x2-step square
    pub origin: Vec2,
}

/// Every piece of the session's board, row-major
pub fn grid_view(session: &Session) -> Vec<PieceView> {
    let config = session.config();
    session
        .board()
        .cells()
        .map(|(row, col, kind)| PieceView {
            row,
            col,
            kind: kind.label().to_string(),
            origin: config.piece_origin(row, col),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;
    use crate::config::BoardConfig;

    #[test]
    fn test_grid_view() {
        let mut session = Session::new(BoardConfig::new(5, 3)).unwrap();
        session.cycle_piece(1, 3).unwrap();
        session.cycle_piece(1, 3).unwrap();

        let view = grid_view(&session);
        assert_eq!(view.len(), 8);
        assert_eq!(view[0].origin, Vec2::ZERO);

        let piece = view.iter().find(|p| p.row == 1 && p.col == 3).unwrap();
        assert_eq!(piece.kind, PieceKind::OuterRight.label());
        assert_eq!(piece.origin, Vec2::new(300.0, 100.0));
        assert_eq!(view.iter().filter(|p| p.kind == "no").count(), 7);
    }
}

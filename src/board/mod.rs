//! Board model
//!
//! Source of truth for the piece configuration. The presentation layer
//! renders from it and reports clicks back as `cycle_piece` calls.

pub mod grid;
pub mod piece;

pub use grid::Board;
pub use piece::PieceKind;

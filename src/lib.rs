//! Bitwayz - a grid-based ball-drop puzzle
//!
//! Core modules:
//! - `board`: Piece configuration on the diamond grid
//! - `sim`: Deterministic ball traversal and the edition/play session
//! - `config`: Board dimensions, layout and timing
//! - `platform`: Browser binding for a JavaScript presentation layer

pub mod board;
pub mod config;
pub mod error;
pub mod platform;
pub mod sim;

pub use board::{Board, PieceKind};
pub use config::BoardConfig;
pub use error::{BoardError, ConfigError, SimError};
pub use sim::{Mode, Session, SessionEvent};

/// Default layout and timing constants
pub mod consts {
    /// Default board dimensions
    pub const DEFAULT_WIDTH: u32 = 7;
    pub const DEFAULT_HEIGHT: u32 = 5;

    /// Pixels per grid step; a piece is a 2x2-step diamond
    pub const DPI: f32 = 100.0;
    /// Display scale of the drawing
    pub const SCALE: f32 = 0.4;

    /// Ball radius (pixels)
    pub const BALL_RADIUS: f32 = 20.0;

    /// Duration of one ball motion (linear)
    pub const MOTION_DURATION_MS: u32 = 200;
}

//! Error types for configuration, the board model and the traversal

use std::fmt;

/// Rejected board configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width must be odd so both edges carry a piece on even rows
    EvenWidth(u32),
    WidthTooSmall(u32),
    HeightTooSmall(u32),
    /// A spacing/scale/duration field was zero or negative
    NonPositive(&'static str),
    /// JSON could not be decoded
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvenWidth(w) => write!(f, "board width must be odd, got {w}"),
            Self::WidthTooSmall(w) => write!(f, "board width must be at least 5, got {w}"),
            Self::HeightTooSmall(h) => write!(f, "board height must be at least 3, got {h}"),
            Self::NonPositive(field) => write!(f, "{field} must be positive"),
            Self::Parse(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Board model failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No piece lives at this cell (parity mismatch or out of range)
    InvalidCoordinate { row: i32, col: i32 },
    /// Mutation attempted while a ball is in play
    NotEditable,
    /// A kind label outside the six known kinds
    CorruptPieceKind(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { row, col } => {
                write!(f, "no piece at row {row}, column {col}")
            }
            Self::NotEditable => write!(f, "board is not editable while playing"),
            Self::CorruptPieceKind(label) => write!(f, "unknown piece kind {label:?}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Invariant violations raised while stepping the ball
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    Board(BoardError),
    /// Column completion wrapped the ball onto an even column
    ColumnParity { column: i32 },
    /// The immediate step after a column completion completed a column again
    RepeatedColumnComplete,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(err) => write!(f, "{err}"),
            Self::ColumnParity { column } => {
                write!(f, "column completion landed on even column {column}")
            }
            Self::RepeatedColumnComplete => {
                write!(f, "column completion re-entered more than once")
            }
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for SimError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

//! Diamond-tiled piece grid
//!
//! Cell (row, col) exists only when `row + col` is even. Pieces are stored
//! row-major with one slot per existing cell.

use std::fmt;

use super::piece::PieceKind;
use crate::config::BoardConfig;
use crate::error::BoardError;

/// Piece-kind assignment for every cell of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    pieces: Vec<PieceKind>,
}

impl Board {
    /// Empty board (every piece `None`) shaped by the config
    pub fn new(config: &BoardConfig) -> Self {
        let mut board = Self {
            width: config.width,
            height: config.height,
            pieces: Vec::new(),
        };
        board.pieces = vec![PieceKind::None; board.piece_count()];
        board
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of existing cells
    pub fn piece_count(&self) -> usize {
        let (w, h) = (self.width as usize, self.height as usize);
        let even_rows = h.div_ceil(2);
        let odd_rows = h / 2;
        even_rows * w.div_ceil(2) + odd_rows * (w / 2)
    }

    /// True when a piece lives at (row, col)
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0
            && col >= 0
            && (row as u32) < self.height
            && (col as u32) < self.width
            && (row + col) % 2 == 0
    }

    fn index(&self, row: i32, col: i32) -> Result<usize, BoardError> {
        if !self.contains(row, col) {
            return Err(BoardError::InvalidCoordinate { row, col });
        }
        let (row, col, w) = (row as usize, col as usize, self.width as usize);
        // Even rows hold ceil(w/2) pieces, odd rows floor(w/2)
        let before = (row / 2) * w + (row % 2) * w.div_ceil(2);
        Ok(before + col / 2)
    }

    pub fn piece_at(&self, row: i32, col: i32) -> Result<PieceKind, BoardError> {
        Ok(self.pieces[self.index(row, col)?])
    }

    pub fn set_piece(&mut self, row: i32, col: i32, kind: PieceKind) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        self.pieces[idx] = kind;
        Ok(())
    }

    /// Advance the piece to the next kind, returning the new kind
    pub fn cycle_piece(&mut self, row: i32, col: i32) -> Result<PieceKind, BoardError> {
        let idx = self.index(row, col)?;
        let next = self.pieces[idx].next();
        self.pieces[idx] = next;
        Ok(next)
    }

    /// Set every piece back to `None`
    pub fn reset(&mut self) {
        self.pieces.fill(PieceKind::None);
    }

    /// Every existing cell as (row, col, kind), row-major
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, PieceKind)> + '_ {
        let width = self.width as i32;
        (0..self.height as i32)
            .flat_map(move |row| (row % 2..width).step_by(2).map(move |col| (row, col)))
            .zip(self.pieces.iter().copied())
            .map(|((row, col), kind)| (row, col, kind))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.piece_at(row, col) {
                    Ok(kind) => write!(f, "{kind}")?,
                    Err(_) => f.write_str("..")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

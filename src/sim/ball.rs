//! Ball position on the half-step grid
//!
//! The ball is addressed by the row/column of the piece corner it sits next
//! to. At an edge it is half a step left or right of `column`, half a step
//! above `row`; at a centre it sits exactly on (column, row).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which half of the column the ball sits in while at an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Discrete ball state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub row: i32,
    pub column: i32,
    pub side: Side,
    /// Sitting on a piece centre, about to be deflected
    pub at_center: bool,
}

impl Ball {
    /// Position at the start of a pass: top-left entry of the first piece
    pub fn start() -> Self {
        Self {
            row: 1,
            column: 1,
            side: Side::Left,
            at_center: false,
        }
    }

    /// Pixel position of the ball for the given grid spacing
    pub fn position(&self, dpi: f32) -> Vec2 {
        if self.at_center {
            Vec2::new(dpi * self.column as f32, dpi * self.row as f32)
        } else {
            Vec2::new(
                dpi * (self.column as f32 + 0.5 * self.side.sign() as f32),
                dpi * (self.row as f32 - 0.5),
            )
        }
    }

    /// Grid cell of the piece whose centre is (column, row)
    #[inline]
    pub fn piece_cell(&self) -> (i32, i32) {
        (self.row - 1, self.column - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let ball = Ball::start();
        assert_eq!(ball.position(100.0), Vec2::new(50.0, 50.0));
        assert_eq!(ball.piece_cell(), (0, 0));
    }

    #[test]
    fn test_center_position() {
        let ball = Ball {
            row: 2,
            column: 3,
            side: Side::Right,
            at_center: true,
        };
        assert_eq!(ball.position(100.0), Vec2::new(300.0, 200.0));
        assert_eq!(ball.piece_cell(), (1, 2));
    }

    #[test]
    fn test_side() {
        assert_eq!(Side::Left.sign(), -1);
        assert_eq!(Side::Right.sign(), 1);
        assert_eq!(Side::Left.flipped(), Side::Right);
    }
}

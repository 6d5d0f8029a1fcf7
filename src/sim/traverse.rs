//! Ball traversal state machine
//!
//! One call to [`step`] advances the ball by one discrete move. The ball
//! alternates between an edge (between two pieces, about to enter one) and a
//! centre (on a piece, about to be deflected).

use super::ball::{Ball, Side};
use crate::board::{Board, PieceKind};
use crate::error::SimError;

/// A bistable piece that changed kind while the ball passed through it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceFlip {
    pub row: i32,
    pub col: i32,
    /// Kind after the flip
    pub kind: PieceKind,
}

/// Outcome of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Ball moved to a new position, to be animated
    Moved { flip: Option<PieceFlip> },
    /// Ball passed the bottom row and wrapped to the top of the next column
    ColumnComplete { label: i32 },
    /// Ball left the board through a side
    FellOff,
    /// Ball was stopped by an empty piece
    DeadEnd,
}

/// Advance the ball by one move
pub fn step(board: &mut Board, ball: &mut Ball) -> Result<Step, SimError> {
    let width = board.width() as i32;
    let height = board.height() as i32;

    // Side exit is checked first so a ball at column 0 or width+1 ends here once
    let offside = ball.column == 0 || ball.column > width;
    if offside && ball.row <= height && !ball.at_center {
        return Ok(Step::FellOff);
    }

    if ball.row > height {
        return complete_column(ball);
    }

    if ball.at_center {
        move_from_center(board, ball)
    } else {
        Ok(move_from_edge(ball))
    }
}

/// Wrap from below the last row to the top of the adjacent column.
/// Flipping the side and shifting the column keeps the pixel x unchanged.
fn complete_column(ball: &mut Ball) -> Result<Step, SimError> {
    ball.side = ball.side.flipped();
    ball.column -= ball.side.sign();
    ball.row = 1;
    ball.at_center = false;

    if ball.column.rem_euclid(2) != 1 {
        log::error!("column completion landed on column {}", ball.column);
        return Err(SimError::ColumnParity {
            column: ball.column,
        });
    }

    Ok(Step::ColumnComplete {
        label: (ball.column + 1) / 2,
    })
}

fn move_from_center(board: &mut Board, ball: &mut Ball) -> Result<Step, SimError> {
    ball.at_center = false;
    let (row, col) = ball.piece_cell();
    let kind = board.piece_at(row, col)?;

    if kind == PieceKind::None {
        return Ok(Step::DeadEnd);
    }

    let flip = if kind.is_bistable() {
        let flipped = kind.mirror();
        board.set_piece(row, col, flipped)?;
        Some(PieceFlip {
            row,
            col,
            kind: flipped,
        })
    } else {
        None
    };

    let exits_right = kind == PieceKind::OuterLeft
        || kind == PieceKind::BistableLeft
        || (kind == PieceKind::OuterBoth && ball.side == Side::Right);
    ball.side = if exits_right { Side::Right } else { Side::Left };
    ball.row += 1;
    ball.column -= ball.side.sign();

    Ok(Step::Moved { flip })
}

fn move_from_edge(ball: &mut Ball) -> Step {
    ball.at_center = true;
    Step::Moved { flip: None }
}

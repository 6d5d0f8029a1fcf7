//! Edition/play session
//!
//! Owns the board and the ball, gates edits by mode and drives the traversal
//! one step per completed motion. Everything the presentation needs to know
//! is queued as a [`SessionEvent`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::traverse::{Step, step};
use crate::board::{Board, PieceKind};
use crate::config::BoardConfig;
use crate::error::{BoardError, ConfigError, SimError};

/// Edition and play are mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Pieces can be cycled, no ball
    Edition,
    /// Ball in flight, board read-only
    Play,
}

/// Why a play pass ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassEnd {
    FellOff,
    DeadEnd,
    /// Mode toggled by the user mid-pass
    Cancelled,
    /// An invariant was violated
    Fault,
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    ModeChanged {
        mode: Mode,
    },
    PieceChanged {
        row: i32,
        col: i32,
        kind: PieceKind,
    },
    /// Ball (re)created at a position without animation
    BallPlaced {
        position: Vec2,
        radius: f32,
    },
    BallRemoved,
    /// Animate the ball, then call `motion_finished(ticket)`
    MotionRequested {
        from: Vec2,
        to: Vec2,
        duration_ms: u32,
        ticket: u64,
    },
    /// A bistable piece flipped; show the new kind after `delay_ms`
    PieceFlipped {
        row: i32,
        col: i32,
        kind: PieceKind,
        delay_ms: u32,
    },
    ColumnCompleted {
        label: String,
    },
    LabelsCleared,
    PassEnded {
        reason: PassEnd,
    },
}

/// A board plus the single ball traversing it
#[derive(Debug, Clone)]
pub struct Session {
    config: BoardConfig,
    board: Board,
    mode: Mode,
    ball: Option<Ball>,
    /// Column-complete labels of the current or last pass
    labels: Vec<String>,
    /// Ticket of the motion currently being animated
    pending: Option<u64>,
    next_ticket: u64,
    events: Vec<SessionEvent>,
}

impl Session {
    /// New session in edition mode with an empty board
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(&config);
        log::info!(
            "Board {}x{} with {} pieces",
            config.width,
            config.height,
            board.piece_count()
        );
        Ok(Self {
            config,
            board,
            mode: Mode::Edition,
            ball: None,
            labels: Vec::new(),
            pending: None,
            next_ticket: 1,
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    /// Pixel position of the ball, if one is in play
    pub fn ball_position(&self) -> Option<Vec2> {
        self.ball.map(|b| b.position(self.config.dpi))
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Ticket the presentation must hand back once the current motion ends
    pub fn pending_motion(&self) -> Option<u64> {
        self.pending
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn ensure_editable(&self) -> Result<(), BoardError> {
        if self.mode == Mode::Play {
            log::warn!("Ignoring edit while a ball is in play");
            return Err(BoardError::NotEditable);
        }
        Ok(())
    }

    /// Advance a piece to its next kind (edition mode only)
    pub fn cycle_piece(&mut self, row: i32, col: i32) -> Result<PieceKind, BoardError> {
        self.ensure_editable()?;
        let kind = self.board.cycle_piece(row, col)?;
        self.events
            .push(SessionEvent::PieceChanged { row, col, kind });
        Ok(kind)
    }

    /// Set a piece directly (edition mode only)
    pub fn set_piece(&mut self, row: i32, col: i32, kind: PieceKind) -> Result<(), BoardError> {
        self.ensure_editable()?;
        self.board.set_piece(row, col, kind)?;
        self.events
            .push(SessionEvent::PieceChanged { row, col, kind });
        Ok(())
    }

    /// Set a piece from its kind label, as sent by the presentation
    pub fn set_piece_label(
        &mut self,
        row: i32,
        col: i32,
        label: &str,
    ) -> Result<PieceKind, BoardError> {
        let kind: PieceKind = label.parse()?;
        self.set_piece(row, col, kind)?;
        Ok(kind)
    }

    /// Clear every piece (edition mode only)
    pub fn reset_board(&mut self) -> Result<(), BoardError> {
        self.ensure_editable()?;
        self.board.reset();
        for (row, col, kind) in self.board.cells() {
            self.events
                .push(SessionEvent::PieceChanged { row, col, kind });
        }
        Ok(())
    }

    /// Switch between edition and play
    pub fn toggle_mode(&mut self) -> Result<(), SimError> {
        match self.mode {
            Mode::Edition => self.start_pass(),
            Mode::Play => {
                self.end_pass(PassEnd::Cancelled);
                Ok(())
            }
        }
    }

    /// The presentation finished animating motion `ticket`.
    /// Stale tickets and notifications outside play are ignored.
    pub fn motion_finished(&mut self, ticket: u64) -> Result<(), SimError> {
        if self.mode != Mode::Play || self.pending != Some(ticket) {
            log::debug!("Ignoring stale motion {ticket}");
            return Ok(());
        }
        self.pending = None;
        self.advance()
    }

    fn start_pass(&mut self) -> Result<(), SimError> {
        self.mode = Mode::Play;
        self.labels.clear();
        let ball = Ball::start();
        self.ball = Some(ball);
        log::info!("Play: ball dropped at row {} column {}", ball.row, ball.column);

        self.events.push(SessionEvent::ModeChanged { mode: Mode::Play });
        self.events.push(SessionEvent::LabelsCleared);
        self.events.push(SessionEvent::BallPlaced {
            position: ball.position(self.config.dpi),
            radius: self.config.ball_radius,
        });
        self.advance()
    }

    fn end_pass(&mut self, reason: PassEnd) {
        self.mode = Mode::Edition;
        self.pending = None;
        if self.ball.take().is_some() {
            self.events.push(SessionEvent::BallRemoved);
        }
        log::info!("Pass ended: {reason:?}, columns completed: {}", self.labels.len());
        self.events.push(SessionEvent::PassEnded { reason });
        self.events.push(SessionEvent::ModeChanged {
            mode: Mode::Edition,
        });
    }

    /// Run one step; a fault ends the pass before the error is returned
    fn advance(&mut self) -> Result<(), SimError> {
        let result = self.try_advance();
        if let Err(err) = &result {
            log::error!("Traversal fault: {err}");
            self.end_pass(PassEnd::Fault);
        }
        result
    }

    fn try_advance(&mut self) -> Result<(), SimError> {
        let Some(mut ball) = self.ball else {
            return Ok(());
        };
        let dpi = self.config.dpi;

        let mut from = ball.position(dpi);
        let mut outcome = step(&mut self.board, &mut ball)?;

        if let Step::ColumnComplete { label } = outcome {
            let label = label.to_string();
            log::debug!("Column {label} complete");
            self.labels.push(label.clone());
            self.events.push(SessionEvent::ColumnCompleted { label });
            from = ball.position(dpi);
            self.events.push(SessionEvent::BallPlaced {
                position: from,
                radius: self.config.ball_radius,
            });

            // Exactly one immediate re-entry: the wrapped ball sits at row 1
            outcome = step(&mut self.board, &mut ball)?;
            if matches!(outcome, Step::ColumnComplete { .. }) {
                return Err(SimError::RepeatedColumnComplete);
            }
        }
        self.ball = Some(ball);

        match outcome {
            Step::Moved { flip } => {
                let ticket = self.next_ticket;
                self.next_ticket += 1;
                self.pending = Some(ticket);
                self.events.push(SessionEvent::MotionRequested {
                    from,
                    to: ball.position(dpi),
                    duration_ms: self.config.duration_ms,
                    ticket,
                });
                if let Some(flip) = flip {
                    log::debug!("Piece ({}, {}) flipped to {}", flip.row, flip.col, flip.kind);
                    self.events.push(SessionEvent::PieceFlipped {
                        row: flip.row,
                        col: flip.col,
                        kind: flip.kind,
                        delay_ms: self.config.flip_delay_ms(),
                    });
                }
            }
            Step::FellOff => self.end_pass(PassEnd::FellOff),
            Step::DeadEnd => self.end_pass(PassEnd::DeadEnd),
            Step::ColumnComplete { .. } => return Err(SimError::RepeatedColumnComplete),
        }
        Ok(())
    }
}

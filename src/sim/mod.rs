//! Deterministic ball traversal
//!
//! All gameplay logic lives here. No timers, rendering or platform code:
//! the presentation layer reports finished motions and the session answers
//! with the next motion to animate.

pub mod ball;
pub mod session;
pub mod traverse;

pub use ball::{Ball, Side};
pub use session::{Mode, PassEnd, Session, SessionEvent};
pub use traverse::{PieceFlip, Step, step};

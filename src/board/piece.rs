//! Deflector piece kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Configured behaviour of a grid cell, in cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PieceKind {
    /// Stops the ball
    #[default]
    None,
    /// Sends the ball out on its left (side +1)
    OuterLeft,
    OuterRight,
    /// Keeps a ball coming from the right on the right, otherwise left
    OuterBoth,
    /// Like `OuterLeft`, then flips to `BistableRight`
    BistableLeft,
    /// Like `OuterRight`, then flips to `BistableLeft`
    BistableRight,
}

impl PieceKind {
    /// All kinds in cycle order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::None,
        PieceKind::OuterLeft,
        PieceKind::OuterRight,
        PieceKind::OuterBoth,
        PieceKind::BistableLeft,
        PieceKind::BistableRight,
    ];

    fn index(self) -> usize {
        match self {
            PieceKind::None => 0,
            PieceKind::OuterLeft => 1,
            PieceKind::OuterRight => 2,
            PieceKind::OuterBoth => 3,
            PieceKind::BistableLeft => 4,
            PieceKind::BistableRight => 5,
        }
    }

    /// Next kind in the cycle, wrapping after the last
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Kind a bistable piece turns into once the ball passed; others are unchanged
    pub fn mirror(self) -> Self {
        match self {
            PieceKind::BistableLeft => PieceKind::BistableRight,
            PieceKind::BistableRight => PieceKind::BistableLeft,
            other => other,
        }
    }

    pub fn is_bistable(self) -> bool {
        matches!(self, PieceKind::BistableLeft | PieceKind::BistableRight)
    }

    /// Short code used as the presentation class name
    pub fn label(self) -> &'static str {
        match self {
            PieceKind::None => "no",
            PieceKind::OuterLeft => "ol",
            PieceKind::OuterRight => "or",
            PieceKind::OuterBoth => "ob",
            PieceKind::BistableLeft => "bl",
            PieceKind::BistableRight => "br",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PieceKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| BoardError::CorruptPieceKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(PieceKind::None.next(), PieceKind::OuterLeft);
        assert_eq!(PieceKind::OuterBoth.next(), PieceKind::BistableLeft);
        assert_eq!(PieceKind::BistableRight.next(), PieceKind::None);
    }

    #[test]
    fn test_mirror() {
        assert_eq!(PieceKind::BistableLeft.mirror(), PieceKind::BistableRight);
        assert_eq!(PieceKind::BistableRight.mirror(), PieceKind::BistableLeft);
        assert_eq!(PieceKind::OuterBoth.mirror(), PieceKind::OuterBoth);
    }

    #[test]
    fn test_labels_parse_back() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.label().parse::<PieceKind>(), Ok(kind));
        }
        assert_eq!(
            "xx".parse::<PieceKind>(),
            Err(BoardError::CorruptPieceKind("xx".to_string()))
        );
    }

    proptest! {
        #[test]
        fn cycle_has_period_six(start in 0usize..6, laps in 0usize..20) {
            let kind = PieceKind::ALL[start];
            let mut cycled = kind;
            for _ in 0..laps * 6 {
                cycled = cycled.next();
            }
            prop_assert_eq!(cycled, kind);
        }

        #[test]
        fn cycle_visits_every_kind(start in 0usize..6) {
            let mut kind = PieceKind::ALL[start];
            let mut seen = Vec::new();
            for _ in 0..6 {
                seen.push(kind);
                kind = kind.next();
            }
            for k in PieceKind::ALL {
                prop_assert!(seen.contains(&k));
            }
        }
    }
}

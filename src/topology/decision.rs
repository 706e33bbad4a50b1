// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The three decisions every node offers.

use crate::topology::constants::NDECISIONS;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// One of a node's three decision slots.
///
/// The page presents them as "up", "down" and "sideways"; they are
/// submitted as options 1, 2 and 3.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, EnumString, Display,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Decision {
    Up,
    Down,
    Sideways,
}

impl Decision {
    /// Create from a 1-based option number, returning None if not in 1..=3.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            1 => Some(Decision::Up),
            2 => Some(Decision::Down),
            3 => Some(Decision::Sideways),
            _ => None,
        }
    }

    /// Create from a 0-based slot, panicking if out of range.
    pub fn from_slot(slot: usize) -> Self {
        assert!(slot < NDECISIONS, "Decision slot out of range: {}", slot);
        match slot {
            0 => Decision::Up,
            1 => Decision::Down,
            _ => Decision::Sideways,
        }
    }

    /// 1-based option number as submitted with the page request.
    pub fn index(self) -> u8 {
        self.slot() as u8 + 1
    }

    /// 0-based slot for array indexing.
    pub fn slot(self) -> usize {
        match self {
            Decision::Up => 0,
            Decision::Down => 1,
            Decision::Sideways => 2,
        }
    }

    /// Interpret an override directive. Anything other than exactly up or
    /// down, ignoring case, means sideways.
    pub fn from_directive(directive: &str) -> Self {
        directive.parse().unwrap_or(Decision::Sideways)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_decision_count() {
        assert_eq!(Decision::COUNT, NDECISIONS);
    }

    #[test]
    fn test_index_round_trip() {
        for decision in Decision::iter() {
            assert_eq!(Decision::from_index(decision.index() as i32), Some(decision));
            assert_eq!(Decision::from_slot(decision.slot()), decision);
        }
        assert_eq!(Decision::from_index(0), None);
        assert_eq!(Decision::from_index(4), None);
    }

    #[test]
    fn test_directives() {
        assert_eq!(Decision::from_directive("up"), Decision::Up);
        assert_eq!(Decision::from_directive("UP"), Decision::Up);
        assert_eq!(Decision::from_directive("Down"), Decision::Down);
        assert_eq!(Decision::from_directive("sideways"), Decision::Sideways);
        assert_eq!(Decision::from_directive("left"), Decision::Sideways);
        assert_eq!(Decision::from_directive(""), Decision::Sideways);
        assert_eq!(Decision::from_directive(" up"), Decision::Sideways);
    }

    #[test]
    fn test_display() {
        assert_eq!(Decision::Down.to_string(), "down");
    }
}

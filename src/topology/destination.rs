// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Node, goal and destination identifiers.
//!
//! The persisted layout and the page feed speak in raw integers where the
//! ranges double as type tags: 0 is unknown, 1..=6 a goal, 92..=104 a node.
//! Inside the crate those integers are lifted into [`Destination`] so that
//! every branch over them is checked by the compiler.

use crate::topology::constants::{FIRST_GOAL, FIRST_NODE, LAST_GOAL, LAST_HUB, LAST_NODE};
use std::fmt;

/// A node (choice adventure) in the range `FIRST_NODE..=LAST_NODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u8);

impl NodeId {
    /// Create a node id, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in `FIRST_NODE..=LAST_NODE`.
    pub const fn new(value: u8) -> Self {
        assert!(
            value >= FIRST_NODE && value <= LAST_NODE,
            "Node out of range"
        );
        Self(value)
    }

    /// Try to create a node id from a raw integer, returning None if out of range.
    pub fn try_new(value: i32) -> Option<Self> {
        if value >= FIRST_NODE as i32 && value <= LAST_NODE as i32 {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Create a node id from a 0-based table index.
    pub fn from_index(index: usize) -> Self {
        Self::new(FIRST_NODE + index as u8)
    }

    /// Iterate over every node in ascending order.
    pub fn all() -> impl Iterator<Item = NodeId> {
        (FIRST_NODE..=LAST_NODE).map(NodeId)
    }

    /// The choice adventure number.
    pub fn value(self) -> u8 {
        self.0
    }

    /// 0-based index for table lookups.
    pub fn index(self) -> usize {
        (self.0 - FIRST_NODE) as usize
    }

    /// Whether this is one of the hub nodes an `AnyEntry` exit can lead to.
    pub fn is_hub(self) -> bool {
        self.0 <= LAST_HUB
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A goal (terminal reward) in the range `FIRST_GOAL..=LAST_GOAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GoalId(u8);

impl GoalId {
    /// Create a goal id, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in `FIRST_GOAL..=LAST_GOAL`.
    pub const fn new(value: u8) -> Self {
        assert!(
            value >= FIRST_GOAL && value <= LAST_GOAL,
            "Goal out of range"
        );
        Self(value)
    }

    /// Try to create a goal id from a raw integer, returning None if out of range.
    pub fn try_new(value: i32) -> Option<Self> {
        if value >= FIRST_GOAL as i32 && value <= LAST_GOAL as i32 {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Iterate over every goal in ascending order.
    pub fn all() -> impl Iterator<Item = GoalId> {
        (FIRST_GOAL..=LAST_GOAL).map(GoalId)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// 0-based index for table lookups.
    pub fn index(self) -> usize {
        (self.0 - FIRST_GOAL) as usize
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a decision leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Destination {
    /// Not observed yet.
    #[default]
    Unknown,
    /// Static tables only: one of the hub nodes, not distinguishable in advance.
    AnyEntry,
    Node(NodeId),
    Goal(GoalId),
}

impl Destination {
    /// Shorthand for a node destination (used by the static tables).
    pub const fn node(value: u8) -> Self {
        Destination::Node(NodeId::new(value))
    }

    /// Shorthand for a goal destination (used by the static tables).
    pub const fn goal(value: u8) -> Self {
        Destination::Goal(GoalId::new(value))
    }

    /// Decode a persisted integer.
    ///
    /// Returns None for integers that are neither 0, a goal, nor a node.
    /// `AnyEntry` has no persisted form.
    pub fn from_code(code: i32) -> Option<Self> {
        if code == 0 {
            return Some(Destination::Unknown);
        }
        if let Some(goal) = GoalId::try_new(code) {
            return Some(Destination::Goal(goal));
        }
        NodeId::try_new(code).map(Destination::Node)
    }

    /// The persisted integer. `AnyEntry` shares 0 with `Unknown`.
    pub fn code(self) -> u8 {
        match self {
            Destination::Unknown | Destination::AnyEntry => 0,
            Destination::Node(node) => node.value(),
            Destination::Goal(goal) => goal.value(),
        }
    }

    pub fn is_unknown(self) -> bool {
        self == Destination::Unknown
    }

    /// Whether the destination is a real, observed outcome.
    pub fn is_observed(self) -> bool {
        matches!(self, Destination::Node(_) | Destination::Goal(_))
    }

    /// The node this leads to, if any.
    pub fn as_node(self) -> Option<NodeId> {
        match self {
            Destination::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Whether a static table entry `self` is satisfied by the learned value `learned`.
    ///
    /// `AnyEntry` matches any hub node; everything else needs an exact match.
    pub fn admits(self, learned: Destination) -> bool {
        match (self, learned) {
            (Destination::AnyEntry, Destination::Node(node)) => node.is_hub(),
            (Destination::AnyEntry, _) => false,
            (wanted, learned) => wanted == learned,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Unknown => write!(f, "unknown"),
            Destination::AnyEntry => write!(f, "any entry"),
            Destination::Node(node) => write!(f, "node {}", node),
            Destination::Goal(goal) => write!(f, "goal {}", goal),
        }
    }
}

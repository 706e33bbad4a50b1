// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed dimensions of the Louvre choice graph.
//!
//! Nodes are the choice adventures 92..=104. Goals are the six rewards 1..=6
//! that end a trip through the gallery. The two ranges are disjoint, and 0 is
//! reserved for an unknown destination in the persisted layout.

/// First node (choice adventure number) in the graph.
pub const FIRST_NODE: u8 = 92;

/// Last node (choice adventure number) in the graph.
pub const LAST_NODE: u8 = 104;

/// Number of nodes in the graph.
pub const NNODES: usize = (LAST_NODE - FIRST_NODE + 1) as usize;

/// First goal identifier.
pub const FIRST_GOAL: u8 = 1;

/// Last goal identifier.
pub const LAST_GOAL: u8 = 6;

/// Number of goals.
pub const NGOALS: usize = (LAST_GOAL - FIRST_GOAL + 1) as usize;

/// Every node offers exactly this many decisions.
pub const NDECISIONS: usize = 3;

/// The hub ("entry") nodes are the first `NHUBS` nodes: 92..=95.
///
/// Exits marked `AnyEntry` in the static tables lead to one of these,
/// and which one is only known after walking through.
pub const NHUBS: usize = 4;

/// Last hub node.
pub const LAST_HUB: u8 = FIRST_NODE + NHUBS as u8 - 1;

/// Cost of an unreachable destination.
pub const INFINITE_HOPS: u32 = u32::MAX;

/// Added to the heuristic estimate of an unexplored decision, so that any
/// known path up to nine hops shorter than the estimate wins.
pub const UNKNOWN_PENALTY: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!(NNODES, 13);
        assert_eq!(NGOALS, 6);
        assert_eq!(LAST_HUB, 95);
        // Goals and nodes never overlap
        assert!(LAST_GOAL < FIRST_NODE);
    }
}

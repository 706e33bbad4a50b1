// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The external mapper's numbering scheme.
//!
//! The mapper numbers the thirteen paintings 0..=12 in its own order, and
//! the six rewards 13..=18:
//!
//! ```text
//!  0 = 92   Escher: Relativity            7 = 101  Hopper
//!  1 = 93   Escher: House of Stairs       8 = 102  Seurat
//!  2 = 94   Escher: Labyrinth             9 = 103  Leonardo da Vinci
//!  3 = 95   Escher: Ascending/Descending 10 = 104  Dali
//!  4 = 97   Munch                        11 = 99   Michelangelo
//!  5 = 98   Botticelli                   12 = 100  David
//!  6 = 96   Mondrian
//!
//! 13 = Muscle   14 = Mysticality   15 = Moxie
//! 16 = Manetwich   17 = bottle of Vangoghbitussin   18 = bottle of Pinot Renoir
//! ```
//!
//! Anything without an ordinal (unknown, or the any-entry placeholder) maps
//! to [`UNMAPPED`], which sorts after every real ordinal.

use crate::topology::constants::{NGOALS, NNODES};
use crate::topology::{Destination, GoalId, NodeId};

/// An ordinal in the mapper's scheme.
pub type Ordinal = u8;

/// Ordinal of anything the mapper does not number.
pub const UNMAPPED: Ordinal = Ordinal::MAX;

/// Ordinals below this are hubs.
pub const HUB_ORDINALS: Ordinal = 4;

/// Node for each node ordinal 0..=12.
const ORDINAL_TO_NODE: [u8; NNODES] = [92, 93, 94, 95, 97, 98, 96, 101, 102, 103, 104, 99, 100];

/// Goal for each goal ordinal 13..=18.
const ORDINAL_TO_GOAL: [u8; NGOALS] = [4, 5, 6, 1, 2, 3];

/// Ordinal for each node, indexed by `NodeId::index()`.
const NODE_TO_ORDINAL: [Ordinal; NNODES] = [0, 1, 2, 3, 6, 4, 5, 11, 12, 7, 8, 9, 10];

/// Ordinal for each goal, indexed by `GoalId::index()`.
const GOAL_TO_ORDINAL: [Ordinal; NGOALS] = [16, 17, 18, 13, 14, 15];

/// Translate a destination to its ordinal.
pub fn to_ordinal(destination: Destination) -> Ordinal {
    match destination {
        Destination::Node(node) => NODE_TO_ORDINAL[node.index()],
        Destination::Goal(goal) => GOAL_TO_ORDINAL[goal.index()],
        Destination::Unknown | Destination::AnyEntry => UNMAPPED,
    }
}

/// The node with node ordinal `ordinal` (0..=12), panicking otherwise.
pub fn node_at(ordinal: Ordinal) -> NodeId {
    assert!(
        (ordinal as usize) < NNODES,
        "Not a node ordinal: {}",
        ordinal
    );
    NodeId::new(ORDINAL_TO_NODE[ordinal as usize])
}

/// Translate an ordinal back to a destination; out-of-range ordinals are `Unknown`.
pub fn from_ordinal(ordinal: Ordinal) -> Destination {
    let index = ordinal as usize;
    if index < NNODES {
        Destination::Node(NodeId::new(ORDINAL_TO_NODE[index]))
    } else if index < NNODES + NGOALS {
        Destination::Goal(GoalId::new(ORDINAL_TO_GOAL[index - NNODES]))
    } else {
        Destination::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(to_ordinal(Destination::node(92)), 0);
        assert_eq!(to_ordinal(Destination::node(96)), 6);
        assert_eq!(to_ordinal(Destination::node(97)), 4);
        assert_eq!(to_ordinal(Destination::node(100)), 12);
        assert_eq!(to_ordinal(Destination::goal(4)), 13);
        assert_eq!(to_ordinal(Destination::goal(1)), 16);
        assert_eq!(to_ordinal(Destination::Unknown), UNMAPPED);
        assert_eq!(to_ordinal(Destination::AnyEntry), UNMAPPED);
    }

    #[test]
    fn test_bijection() {
        for ordinal in 0..(NNODES + NGOALS) as Ordinal {
            assert_eq!(to_ordinal(from_ordinal(ordinal)), ordinal);
        }
        for node in NodeId::all() {
            assert_eq!(from_ordinal(to_ordinal(Destination::Node(node))), Destination::Node(node));
        }
        for goal in GoalId::all() {
            assert_eq!(from_ordinal(to_ordinal(Destination::Goal(goal))), Destination::Goal(goal));
        }
        assert_eq!(from_ordinal(UNMAPPED), Destination::Unknown);
        assert_eq!(from_ordinal(19), Destination::Unknown);
    }

    #[test]
    fn test_hub_ordinals() {
        for ordinal in 0..NNODES as Ordinal {
            assert_eq!(node_at(ordinal).is_hub(), ordinal < HUB_ORDINALS);
        }
        // Goals follow the nodes, Muscle first
        assert_eq!(to_ordinal(Destination::goal(4)), NNODES as Ordinal);
    }
}

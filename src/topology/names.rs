// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Display names for nodes and goals, and the page text that announces a goal.

use crate::topology::constants::{NGOALS, NNODES};
use crate::topology::{Destination, GoalId, NodeId};

/// Painting shown at each node, indexed by `NodeId::index()`.
pub const NODE_NAMES: [&str; NNODES] = [
    "Escher: Relativity",
    "Escher: House of Stairs",
    "Escher: Labyrinth",
    "Escher: Ascending and Descending",
    "Mondrian: Moxie, Manetwich, Pinot Renoir",
    "Munch: The Scream: Muscle, Manetwich, Vangoghbitussin",
    "Botticelli: The Birth of Venus: Mysticality, Vangoghbitussin, Pinot Renoir",
    "Michelangelo: The Creation of Adam: Moxie, Pinot Renoir",
    "David: The Death of Socrates: Moxie, Manetwich",
    "Hopper: Nighthawks: Muscle, Manetwich",
    "Seurat: Sunday Afternoon on the Island of La Grande Jatte: Muscle, Vangoghbitussin",
    "Leonardo da Vinci: The Last Supper: Mysticality, Vangoghbitussin",
    "Dali: The Persistence of Memory: Mysticality, Pinot Renoir",
];

/// Reward for each goal, indexed by `GoalId::index()`.
pub const GOAL_NAMES: [&str; NGOALS] = [
    "Manetwich",
    "bottle of Vangoghbitussin",
    "bottle of Pinot Renoir",
    "Muscle",
    "Mysticality",
    "Moxie",
];

/// Text that appears on the page when a goal is reached, indexed by `GoalId::index()`.
pub const GOAL_MARKERS: [&str; NGOALS] = [
    "Manetwich",
    "bottle of Vangoghbitussin",
    "bottle of Pinot Renoir",
    "a pretty good workout.",
    "new insight as to the nature of the universe.",
    "Moxious!",
];

pub fn node_name(node: NodeId) -> &'static str {
    NODE_NAMES[node.index()]
}

pub fn goal_name(goal: GoalId) -> &'static str {
    GOAL_NAMES[goal.index()]
}

/// Label for a destination; empty while it is still unknown.
pub fn destination_name(destination: Destination) -> &'static str {
    match destination {
        Destination::Unknown => "",
        Destination::AnyEntry => "Escher",
        Destination::Node(node) => node_name(node),
        Destination::Goal(goal) => goal_name(goal),
    }
}

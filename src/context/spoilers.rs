// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-node labels for showing the user what each option leads to.

use crate::state::LearnedMap;
use crate::topology::constants::NDECISIONS;
use crate::topology::names::{destination_name, node_name};
use crate::topology::{Decision, NodeId};

/// Labels for one node: its setting key, its name, and what each option
/// is known to lead to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spoilers {
    /// Preference key the host uses for this choice.
    pub setting: String,
    pub name: &'static str,
    /// One label per option; empty while the option is unexplored.
    pub options: [&'static str; NDECISIONS],
}

/// Spoilers for `node` from what has been learned so far.
pub fn spoilers(map: &LearnedMap, node: NodeId) -> Spoilers {
    let learned = *map.decisions(node);
    Spoilers {
        setting: format!("choiceAdventure{}", node.value()),
        name: node_name(node),
        options: learned.map(destination_name),
    }
}

/// Whether taking `decision` at `node` is known to stay inside the graph.
pub fn is_free_step(map: &LearnedMap, node: NodeId, decision: Decision) -> bool {
    map.get(node, decision).as_node().is_some()
}

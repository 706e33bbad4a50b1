// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Static routing-table lookup.
//!
//! The preferred destinations for (node, goal) are tried best first against
//! the node's learned decisions. If none of them has been learned yet, the
//! first unexplored decision is taken instead.

use crate::state::LearnedMap;
use crate::topology::{legacy_route, Decision, GoalId, NodeId};

/// Pick a decision at `node` towards `goal` from the routing table.
///
/// Returns None when all three decisions are known and none of them is on
/// the preferred list.
pub fn pick_legacy(map: &LearnedMap, node: NodeId, goal: GoalId) -> Option<Decision> {
    let learned = map.decisions(node);

    for wanted in legacy_route(node, goal) {
        if let Some(slot) = learned.iter().position(|&d| wanted.admits(d)) {
            return Some(Decision::from_slot(slot));
        }
    }

    learned
        .iter()
        .position(|d| d.is_unknown())
        .map(Decision::from_slot)
}

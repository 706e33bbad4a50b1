// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shortest-known-path search over the learned map.
//!
//! Each of the current node's decisions is costed by a depth-first walk of
//! what has been learned so far:
//!
//! - reaching the target goal costs the hops taken to get there
//! - reaching any other goal is a dead end
//! - an unexplored decision costs the hops so far, plus the heuristic
//!   estimate from the node it leaves, plus `UNKNOWN_PENALTY`
//! - re-entering a node already on the walk is a dead end
//!
//! The visited set is shared by the whole walk below one top-level decision
//! and is never unmarked on the way back up. It is reset only between the
//! three top-level decisions; tie-breaking depends on exactly this.

use crate::state::LearnedMap;
use crate::topology::constants::{INFINITE_HOPS, NDECISIONS, UNKNOWN_PENALTY};
use crate::topology::{heuristic_hops, Decision, Destination, GoalId, NodeId, NodeSet};
use strum::IntoEnumIterator;

/// Cost of each of `node`'s decisions towards `goal`.
pub fn decision_costs(map: &LearnedMap, node: NodeId, goal: GoalId) -> [u32; NDECISIONS] {
    let mut costs = [INFINITE_HOPS; NDECISIONS];
    for decision in Decision::iter() {
        let mut visited = NodeSet::single(node);
        let destination = map.get(node, decision);
        costs[decision.slot()] = hops_to(map, 0, node, destination, goal, &mut visited);
    }
    costs
}

/// The cheapest decision at `node` towards `goal`.
///
/// Ties go to the earliest decision. If every decision is a dead end the
/// first one is returned.
pub fn pick_dynamic(map: &LearnedMap, node: NodeId, goal: GoalId) -> Decision {
    let costs = decision_costs(map, node, goal);
    let mut best = Decision::Up;
    let mut best_cost = INFINITE_HOPS;
    for decision in Decision::iter() {
        if costs[decision.slot()] < best_cost {
            best = decision;
            best_cost = costs[decision.slot()];
        }
    }
    best
}

/// Hops from `from` through `to` to `goal`, having already taken `hops`.
fn hops_to(
    map: &LearnedMap,
    hops: u32,
    from: NodeId,
    to: Destination,
    goal: GoalId,
    visited: &mut NodeSet,
) -> u32 {
    match to {
        Destination::Goal(reached) if reached == goal => hops,
        Destination::Goal(_) => INFINITE_HOPS,
        Destination::Unknown | Destination::AnyEntry => hops
            .saturating_add(heuristic_hops(from, goal))
            .saturating_add(UNKNOWN_PENALTY),
        Destination::Node(next) => {
            if visited.contains(next) {
                return INFINITE_HOPS;
            }
            visited.insert(next);

            let mut best = INFINITE_HOPS;
            for &exit in map.decisions(next) {
                let cost = hops_to(map, hops + 1, next, exit, goal, visited);
                if cost < best {
                    best = cost;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(value: u8) -> NodeId {
        NodeId::new(value)
    }

    #[test]
    fn test_unknown_map_uses_heuristic() {
        let map = LearnedMap::new();
        // From 96 towards goal 1 the estimate is 2 hops, plus the penalty
        assert_eq!(decision_costs(&map, node(96), GoalId::new(1)), [12, 12, 12]);
        assert_eq!(pick_dynamic(&map, node(96), GoalId::new(1)), Decision::Up);
    }

    #[test]
    fn test_direct_goal_costs_nothing() {
        let mut map = LearnedMap::new();
        map.observe(node(100), Decision::Sideways, Destination::goal(1))
            .unwrap();
        let costs = decision_costs(&map, node(100), GoalId::new(1));
        assert_eq!(costs, [11, 11, 0]);
        assert_eq!(pick_dynamic(&map, node(100), GoalId::new(1)), Decision::Sideways);
    }

    #[test]
    fn test_other_goal_is_dead_end() {
        let mut map = LearnedMap::new();
        map.observe(node(100), Decision::Up, Destination::goal(6))
            .unwrap();
        let costs = decision_costs(&map, node(100), GoalId::new(1));
        assert_eq!(costs[0], INFINITE_HOPS);
        assert_eq!(pick_dynamic(&map, node(100), GoalId::new(1)), Decision::Down);
    }

    /// A map with the given rows set verbatim, bypassing deduction.
    fn map_from(rows: &[(u8, [u8; NDECISIONS])]) -> LearnedMap {
        let mut codes = [[0u8; NDECISIONS]; crate::topology::NNODES];
        for &(value, row) in rows {
            codes[node(value).index()] = row;
        }
        let layout: Vec<String> = codes.iter().flatten().map(|c| c.to_string()).collect();
        LearnedMap::deserialize(&layout.join(",")).unwrap()
    }

    #[test]
    fn test_self_loop_is_dead_end() {
        let map = map_from(&[(92, [92, 0, 0])]);
        let costs = decision_costs(&map, node(92), GoalId::new(4));
        assert_eq!(costs, [INFINITE_HOPS, 13, 13]);
        assert_eq!(pick_dynamic(&map, node(92), GoalId::new(4)), Decision::Down);
    }

    #[test]
    fn test_cycle_back_to_start_is_dead_end() {
        let map = map_from(&[(92, [93, 0, 0]), (93, [92, 92, 92])]);
        let costs = decision_costs(&map, node(92), GoalId::new(4));
        assert_eq!(costs[0], INFINITE_HOPS);
        assert_eq!(pick_dynamic(&map, node(92), GoalId::new(4)), Decision::Down);
    }

    #[test]
    fn test_visited_set_not_unmarked_between_siblings() {
        // 96 reaches 99 twice: directly, and through 97. The walk below one
        // top-level decision keeps its marks, so the second visit is a dead end.
        let map = map_from(&[
            (92, [96, 0, 0]),
            (96, [97, 99, 0]),
            (97, [99, 0, 0]),
            (99, [0, 3, 0]),
        ]);
        let costs = decision_costs(&map, node(92), GoalId::new(3));
        // 92 -> 96 -> 97 -> 99 -> goal 3 is found first, at 3 hops
        assert_eq!(costs[0], 3);
    }

    #[test]
    fn test_two_hop_path() {
        let mut map = LearnedMap::new();
        map.observe(node(97), Decision::Sideways, Destination::node(101))
            .unwrap();
        map.observe(node(101), Decision::Down, Destination::goal(4))
            .unwrap();
        let costs = decision_costs(&map, node(97), GoalId::new(4));
        // Via 101: one hop into 101, then the goal
        assert_eq!(costs[2], 1);
        assert_eq!(pick_dynamic(&map, node(97), GoalId::new(4)), Decision::Sideways);
    }
}

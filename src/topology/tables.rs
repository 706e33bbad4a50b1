// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hand-authored static tables describing the graph skeleton.
//!
//! Three tables, one row per node:
//! - candidate exits: the plausible destinations of the node's decisions,
//!   in no particular slot order (the slot order is what gets learned)
//! - heuristic hops: estimated distance from the node to each goal
//! - legacy routes: preferred next destinations towards each goal
//!
//! `AnyEntry` stands for "one of the four Escher hubs".

use crate::topology::constants::{INFINITE_HOPS, NDECISIONS, NGOALS, NNODES};
use crate::topology::{Destination, GoalId, NodeId};

const E: Destination = Destination::AnyEntry;

const fn n(value: u8) -> Destination {
    Destination::node(value)
}

const fn g(value: u8) -> Destination {
    Destination::goal(value)
}

/// Plausible destinations for each node's decisions.
const CANDIDATE_EXITS: [[Destination; NDECISIONS]; NNODES] = [
    [n(96), n(97), n(98)], // 92
    [n(96), n(97), n(98)], // 93
    [n(96), n(97), n(98)], // 94
    [n(96), n(97), n(98)], // 95
    [E, n(99), n(100)],    // 96
    [E, n(101), n(102)],   // 97
    [E, n(103), n(104)],   // 98
    [E, g(3), g(6)],       // 99
    [E, g(1), g(6)],       // 100
    [E, g(1), g(4)],       // 101
    [E, g(2), g(4)],       // 102
    [E, g(2), g(5)],       // 103
    [E, g(3), g(5)],       // 104
];

/// Estimated hops from each node to goals 1..=6.
const GOAL_HOPS: [[u32; NGOALS]; NNODES] = [
    [3, 3, 3, 3, 3, 3], // 92
    [3, 3, 3, 3, 3, 3], // 93
    [3, 3, 3, 3, 3, 3], // 94
    [3, 3, 3, 3, 3, 3], // 95
    [2, 4, 2, 4, 4, 2], // 96
    [2, 2, 4, 2, 4, 4], // 97
    [4, 2, 2, 4, 2, 4], // 98
    [4, 4, 1, 4, 4, 1], // 99
    [1, 4, 4, 4, 4, 1], // 100
    [1, 4, 4, 1, 4, 4], // 101
    [4, 1, 4, 1, 4, 4], // 102
    [4, 1, 4, 4, 1, 4], // 103
    [4, 4, 1, 4, 1, 4], // 104
];

const HUB_ROUTES: [&[Destination]; NGOALS] = [
    &[n(96), n(97)],
    &[n(97), n(98)],
    &[n(96), n(98)],
    &[n(97)],
    &[n(98)],
    &[n(96)],
];

/// Preferred next destinations from each node towards goals 1..=6.
const LEGACY_ROUTES: [[&[Destination]; NGOALS]; NNODES] = [
    HUB_ROUTES, // 92
    HUB_ROUTES, // 93
    HUB_ROUTES, // 94
    HUB_ROUTES, // 95
    [&[n(100)], &[E], &[n(99)], &[E], &[E], &[n(99), n(100)]], // 96
    [&[n(101)], &[n(102)], &[E], &[n(101), n(102)], &[E], &[E]], // 97
    [&[E], &[n(103)], &[n(104)], &[E], &[n(103), n(104)], &[E]], // 98
    [&[E], &[E], &[g(3)], &[E], &[E], &[g(6)]], // 99
    [&[g(1)], &[E], &[E], &[E], &[E], &[g(6)]], // 100
    [&[g(1)], &[E], &[E], &[g(4)], &[E], &[E]], // 101
    [&[E], &[g(2)], &[E], &[g(4)], &[E], &[E]], // 102
    [&[E], &[g(2)], &[E], &[E], &[g(5)], &[E]], // 103
    [&[E], &[E], &[g(3)], &[E], &[g(5)], &[E]], // 104
];

/// The candidate exits of `node`.
pub fn candidate_exits(node: NodeId) -> [Destination; NDECISIONS] {
    CANDIDATE_EXITS[node.index()]
}

/// Estimated hops from `node` to `goal`.
pub fn heuristic_hops(node: NodeId, goal: GoalId) -> u32 {
    GOAL_HOPS[node.index()][goal.index()]
}

/// Estimated hops for raw identifiers; `INFINITE_HOPS` if either is out of range.
pub fn heuristic_hops_raw(node: i32, goal: i32) -> u32 {
    match (NodeId::try_new(node), GoalId::try_new(goal)) {
        (Some(node), Some(goal)) => heuristic_hops(node, goal),
        _ => INFINITE_HOPS,
    }
}

/// Preferred destinations from `node` towards `goal`, best first.
pub fn legacy_route(node: NodeId, goal: GoalId) -> &'static [Destination] {
    LEGACY_ROUTES[node.index()][goal.index()]
}

/// Legacy route for raw identifiers; None if either is out of range.
pub fn legacy_route_raw(node: i32, goal: i32) -> Option<&'static [Destination]> {
    Some(legacy_route(NodeId::try_new(node)?, GoalId::try_new(goal)?))
}

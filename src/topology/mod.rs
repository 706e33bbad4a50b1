// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: immutable description of the graph.
//!
//! This module contains type-safe identifiers and the hand-authored tables:
//! - NodeId, GoalId: the two disjoint identifier ranges
//! - Destination: what a decision leads to (possibly still unknown)
//! - Decision: one of the three slots every node offers
//! - NodeSet: bitset of nodes, used as a visited set
//! - tables: candidate exits, heuristic hops and legacy routes
//! - names: display names and goal marker text

pub mod constants;
pub mod decision;
pub mod destination;
pub mod names;
pub mod node_set;
pub mod tables;

pub use constants::*;
pub use decision::Decision;
pub use destination::{Destination, GoalId, NodeId};
pub use node_set::NodeSet;
pub use tables::{
    candidate_exits, heuristic_hops, heuristic_hops_raw, legacy_route, legacy_route_raw,
};

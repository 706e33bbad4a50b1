// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Navigator for the Louvre choice graph.
//!
//! The Louvre is a small maze of thirteen choices whose exits are shuffled
//! every epoch. Each choice offers three options (Up, Down, Sideways); each
//! option leads either to another choice or to one of six rewards. This crate
//! learns the shuffled layout from observations, recommends which option to
//! take towards a reward, and exports what it has learned as a compact code
//! for an external mapper.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Fixed for the whole session:
//! - Static graph tables: candidate exits, goal hop heuristics, legacy routes
//! - Codec exit order derived from the candidate exits
//! - Override directives and mapper link from configuration
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Changes as the graph is walked:
//! - Learned map - one slot per (node, decision), first observation wins
//! - Statistics - observations, deductions, and routing decisions
//!
//! # Routing
//!
//! For each request the [`router::Router`] tries, in order:
//!
//! 1. **Overrides**: a fixed sequence of directives, indexed by step
//! 2. **Dynamic**: depth-first search over the learned map, unknown exits
//!    estimated by hop heuristic plus a penalty
//! 3. **Legacy**: fixed preferred-destination tables for experienced users
//!
//! The learned map is persisted after every change to a
//! [`store::PreferenceStore`] and cleared whenever the epoch changes.

pub mod codec;
pub mod config;
pub mod context;
pub mod feed;
pub mod router;
pub mod state;
pub mod store;
pub mod topology;

// Re-export commonly used types
pub use codec::Codec;
pub use config::NavigatorConfig;
pub use context::{NavError, Navigator};
pub use router::{Route, RouteSource, Router, Strategy};
pub use state::{LearnedMap, Observed};
pub use store::{MemoryStore, PreferenceStore, TomlFileStore};
pub use topology::{Decision, Destination, GoalId, NodeId};

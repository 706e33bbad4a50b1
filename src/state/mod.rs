// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: mutable state.
//!
//! - LearnedMap: observed destinations per node and decision, per epoch
//! - layout: the comma-separated persisted form of the map
//! - Statistics: counters kept by the navigator

pub mod layout;
pub mod learned;
pub mod statistics;

pub use layout::LayoutError;
pub use learned::{LearnedMap, ObserveError, Observed};
pub use statistics::{Counters, Statistics};

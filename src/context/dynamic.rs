// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable navigator state (Tier 2: DYNAMIC).

use crate::state::{LearnedMap, Statistics};

/// State that changes as the graph is walked.
///
/// The learned map is the only state that is persisted; statistics live for
/// the session only.
#[derive(Debug, Clone, Default)]
pub struct DynamicState {
    pub map: LearnedMap,
    pub statistics: Statistics,
}

impl DynamicState {
    pub fn new() -> Self {
        Self::default()
    }
}

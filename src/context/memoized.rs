// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable per-session data (Tier 1: MEMO).

use crate::codec::Codec;
use crate::config::NavigatorConfig;
use crate::router::{Overrides, Router};
use tracing::debug;

/// Immutable data built once when the navigator opens.
///
/// The static tables themselves are compile-time constants; what is built
/// here is derived from them (the codec's exit order) or from configuration
/// (override directives, mapper link).
#[derive(Debug, Clone)]
pub struct MemoizedData {
    pub codec: Codec,
    pub router: Router,
    pub mapper_url: String,
}

impl MemoizedData {
    pub fn new(config: &NavigatorConfig) -> Self {
        let overrides = Overrides::parse(&config.overrides);
        debug!(overrides = overrides.len(), "building session tables");
        Self {
            codec: Codec::new(),
            router: Router::new(overrides),
            mapper_url: config.mapper_url.clone(),
        }
    }
}

impl Default for MemoizedData {
    fn default() -> Self {
        Self::new(&NavigatorConfig::default())
    }
}

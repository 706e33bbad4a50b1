// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decision routing.
//!
//! A decision is made in three tiers, first answer wins:
//!
//! 1. Override directives, indexed by the caller's step counter
//! 2. Otherwise, for an inexperienced caller, the dynamic search over the
//!    learned map ([`dynamic`])
//! 3. Otherwise, the static routing table ([`legacy`])
//!
//! Invalid node or goal identifiers give no decision; the caller should
//! leave that visit to the user.

pub mod dynamic;
pub mod legacy;
pub mod overrides;

pub use dynamic::{decision_costs, pick_dynamic};
pub use legacy::pick_legacy;
pub use overrides::Overrides;

use crate::state::LearnedMap;
use crate::topology::{Decision, GoalId, NodeId};
use strum_macros::Display;
use tracing::debug;

/// Which built-in strategy to route with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    Dynamic,
    Legacy,
}

impl Strategy {
    /// Experienced callers use the routing table; everyone else searches.
    pub fn from_experience(experienced: bool) -> Self {
        if experienced {
            Strategy::Legacy
        } else {
            Strategy::Dynamic
        }
    }
}

/// Where a decision came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RouteSource {
    Override,
    Dynamic,
    Legacy,
}

/// A routing answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub decision: Decision,
    pub source: RouteSource,
}

/// One routing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    /// Raw node identifier as reported by the page.
    pub node: i32,
    /// Raw goal identifier.
    pub goal: i32,
    pub strategy: Strategy,
    /// 0-based count of decisions already taken on this trip.
    pub step: usize,
}

/// Routes decisions, consulting overrides before either strategy.
#[derive(Debug, Clone, Default)]
pub struct Router {
    overrides: Overrides,
}

impl Router {
    pub fn new(overrides: Overrides) -> Self {
        Self { overrides }
    }

    /// Decide which option to take.
    ///
    /// Overrides apply whatever the node; after that, an identifier outside
    /// the graph, or a legacy lookup with no match, gives None.
    pub fn choose(&self, map: &LearnedMap, request: RouteRequest) -> Option<Route> {
        if let Some(decision) = self.overrides.directive(request.step) {
            debug!(step = request.step, %decision, "override");
            return Some(Route {
                decision,
                source: RouteSource::Override,
            });
        }

        let node = NodeId::try_new(request.node)?;
        let goal = GoalId::try_new(request.goal)?;

        let route = match request.strategy {
            Strategy::Dynamic => Some(Route {
                decision: pick_dynamic(map, node, goal),
                source: RouteSource::Dynamic,
            }),
            Strategy::Legacy => pick_legacy(map, node, goal).map(|decision| Route {
                decision,
                source: RouteSource::Legacy,
            }),
        };

        match route {
            Some(route) => {
                debug!(%node, %goal, strategy = %request.strategy, decision = %route.decision, "routed")
            }
            None => debug!(%node, %goal, strategy = %request.strategy, "no decision"),
        }
        route
    }
}

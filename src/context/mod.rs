// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Navigator context combining MEMO and DYNAMIC state with persistence.
//!
//! The Navigator is the single owner of the learned map. The host drives it
//! one visit at a time:
//!
//! 1. [`Navigator::open`] (or [`Navigator::reset_for_epoch`]) at the start of
//!    a session binds the map to the current epoch
//! 2. [`Navigator::choose`] before each visit
//! 3. [`Navigator::observe`] or [`Navigator::record_page`] after each visit;
//!    every change is written back to the preference store
//! 4. [`Navigator::map_code`] / [`Navigator::mapper_url`] at any time
//!
//! Visits are sequential, so the navigator takes `&mut self` and is not
//! shared between threads.
//!
//! # Example
//!
//! ```
//! use louvre_nav::config::NavigatorConfig;
//! use louvre_nav::context::Navigator;
//! use louvre_nav::store::MemoryStore;
//! use louvre_nav::topology::Decision;
//!
//! let mut nav = Navigator::open(MemoryStore::new(), NavigatorConfig::default(), 1).unwrap();
//!
//! // From Relativity towards Muscle, nothing learned yet
//! let route = nav.choose(92, 4, false, 0).unwrap();
//! assert_eq!(route.decision, Decision::Up);
//!
//! // Up led to the Munch painting
//! nav.observe_raw(92, 1, 97).unwrap();
//! assert_eq!(nav.map_code().len(), 24);
//! ```

pub mod dynamic;
pub mod memoized;
pub mod spoilers;

pub use dynamic::DynamicState;
pub use memoized::MemoizedData;
pub use spoilers::{is_free_step, spoilers, Spoilers};

use crate::config::{ConfigError, NavigatorConfig};
use crate::feed::{resolve_page, PageArrival, PageRecord};
use crate::router::{Route, RouteRequest, RouteSource, Strategy};
use crate::state::{Counters, LearnedMap, ObserveError, Observed, Statistics};
use crate::store::{PreferenceStore, StoreError};
use crate::topology::{Decision, Destination, NodeId};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced by the navigator.
#[derive(Debug, Error)]
pub enum NavError {
    #[error(transparent)]
    Observe(#[from] ObserveError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Navigator over the learned map, persisting to a preference store.
#[derive(Debug)]
pub struct Navigator<S: PreferenceStore> {
    /// Immutable session data (Tier 1)
    pub memo: MemoizedData,
    /// Learned map and statistics (Tier 2)
    pub state: DynamicState,
    store: S,
    /// The map holds changes the store has not accepted yet.
    unsaved: bool,
}

impl<S: PreferenceStore> Navigator<S> {
    /// Open a navigator for `epoch`, loading whatever the store holds for it.
    pub fn open(store: S, config: NavigatorConfig, epoch: u32) -> Result<Self, NavError> {
        let mut navigator = Self {
            memo: MemoizedData::new(&config),
            state: DynamicState::new(),
            store,
            unsaved: false,
        };
        navigator.reset_for_epoch(epoch)?;
        Ok(navigator)
    }

    /// Rebind to `epoch`; a change of epoch forgets everything learned.
    pub fn reset_for_epoch(&mut self, epoch: u32) -> Result<(), NavError> {
        self.state.map.reset_for_epoch(&mut self.store, epoch)?;
        self.unsaved = false;
        Ok(())
    }

    pub fn map(&self) -> &LearnedMap {
        &self.state.map
    }

    pub fn statistics(&self) -> &Statistics {
        &self.state.statistics
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Release the preference store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Record that `decision` at `node` led to `destination`, and persist.
    ///
    /// If an earlier save failed, the map is saved again even when this
    /// observation changes nothing.
    pub fn observe(
        &mut self,
        node: NodeId,
        decision: Decision,
        destination: Destination,
    ) -> Result<Observed, NavError> {
        let observed = self.state.map.observe(node, decision, destination)?;
        let statistics = &mut self.state.statistics;
        match observed {
            Observed::AlreadyKnown => {
                statistics.increment_counter(Counters::DuplicateObservations);
            }
            Observed::Recorded { deduced } => {
                statistics.increment_counter(Counters::Observations);
                if deduced.is_some() {
                    statistics.increment_counter(Counters::Deductions);
                }
                debug!(%node, %decision, %destination, "observed");
                self.unsaved = true;
            }
        }
        self.flush()?;
        Ok(observed)
    }

    /// Save the map if it has changes the store has not accepted.
    fn flush(&mut self) -> Result<(), NavError> {
        if self.unsaved {
            self.state.map.save(&mut self.store)?;
            self.unsaved = false;
        }
        Ok(())
    }

    /// [`Navigator::observe`] for raw identifiers.
    pub fn observe_raw(
        &mut self,
        node: i32,
        decision: i32,
        destination: i32,
    ) -> Result<Observed, NavError> {
        let node = NodeId::try_new(node).ok_or(ObserveError::InvalidNode(node))?;
        let decision = Decision::from_index(decision).ok_or(ObserveError::InvalidDecision(decision))?;
        let destination = Destination::from_code(destination)
            .filter(|d| d.is_observed())
            .ok_or(ObserveError::InvalidDestination(destination))?;
        self.observe(node, decision, destination)
    }

    /// Record where the last decision led, from the page it produced.
    ///
    /// `last_node` is the choice that was on screen and `last_decision` the
    /// 1-based option submitted.
    pub fn record_page(
        &mut self,
        last_node: i32,
        last_decision: i32,
        text: &str,
    ) -> Result<PageRecord, NavError> {
        let Some(node) = NodeId::try_new(last_node) else {
            return Ok(PageRecord::NotInGraph);
        };
        let Some(decision) = Decision::from_index(last_decision) else {
            return Ok(PageRecord::BogusDecision);
        };
        if !self.state.map.get(node, decision).is_unknown() {
            self.flush()?;
            return Ok(PageRecord::AlreadyMapped);
        }

        match resolve_page(text) {
            PageArrival::Arrived(destination) => {
                let observed = self.observe(node, decision, destination)?;
                Ok(PageRecord::Recorded(observed))
            }
            PageArrival::LeftGraph(choice) => {
                warn!(%node, %decision, choice, "decision left the graph");
                Ok(PageRecord::LeftGraph(choice))
            }
            PageArrival::Unrecognised => {
                warn!(%node, %decision, "cannot tell where decision led");
                Ok(PageRecord::Unrecognised)
            }
        }
    }

    /// Which option to take at `node` towards `goal`.
    ///
    /// `step` counts the decisions already taken this trip and indexes the
    /// override directives. None means the choice is left to the user.
    pub fn choose(&mut self, node: i32, goal: i32, experienced: bool, step: usize) -> Option<Route> {
        let request = RouteRequest {
            node,
            goal,
            strategy: Strategy::from_experience(experienced),
            step,
        };
        let route = self.memo.router.choose(&self.state.map, request);

        let counter = match route.map(|r| r.source) {
            Some(RouteSource::Override) => Counters::OverrideDecisions,
            Some(RouteSource::Dynamic) => Counters::DynamicDecisions,
            Some(RouteSource::Legacy) => Counters::LegacyDecisions,
            None => Counters::Undecided,
        };
        self.state.statistics.increment_counter(counter);
        route
    }

    /// The learned map as a mapper code.
    pub fn map_code(&self) -> String {
        self.memo.codec.encode(&self.state.map)
    }

    /// Link to the mapper showing the learned map.
    pub fn mapper_url(&self) -> String {
        self.memo
            .codec
            .mapper_url(&self.memo.mapper_url, &self.state.map)
    }

    /// Labels for `node`, or None if it is not a node.
    pub fn spoilers(&self, node: i32) -> Option<Spoilers> {
        NodeId::try_new(node).map(|node| spoilers(&self.state.map, node))
    }

    /// Whether option `decision` at `node` is known to stay inside the graph.
    pub fn is_free_step(&self, node: i32, decision: i32) -> bool {
        match (NodeId::try_new(node), Decision::from_index(decision)) {
            (Some(node), Some(decision)) => is_free_step(&self.state.map, node, decision),
            _ => false,
        }
    }
}

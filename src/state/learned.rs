// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! What has been observed about each node's decisions this epoch.
//!
//! Knowledge is append-only within an epoch: a slot that holds a node or a
//! goal is never overwritten. Starting a new epoch wipes the whole map.

use crate::state::layout::{self, LayoutError};
use crate::store::{PreferenceStore, StoreError, EPOCH_KEY, LAYOUT_KEY};
use crate::topology::constants::{NDECISIONS, NNODES};
use crate::topology::{candidate_exits, Decision, Destination, NodeId};
use thiserror::Error;
use tracing::{info, warn};

/// An observation that cannot be recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserveError {
    #[error("{0} is not a node")]
    InvalidNode(i32),

    #[error("{0} is not a decision (expected 1..=3)")]
    InvalidDecision(i32),

    #[error("{0} is not an observable destination")]
    InvalidDestination(i32),

    #[error("cannot record {0} as an observed outcome")]
    Unobservable(Destination),
}

/// Result of recording an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observed {
    /// The slot was already known; nothing changed.
    AlreadyKnown,
    /// The slot was filled in, and possibly a third slot deduced from it.
    Recorded {
        deduced: Option<(Decision, Destination)>,
    },
}

/// The learned decision matrix, tagged with the epoch it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnedMap {
    epoch: Option<u32>,
    slots: [[Destination; NDECISIONS]; NNODES],
}

impl LearnedMap {
    /// An all-unknown map not yet bound to an epoch.
    pub fn new() -> Self {
        Self {
            epoch: None,
            slots: [[Destination::Unknown; NDECISIONS]; NNODES],
        }
    }

    /// Rebuild a map from its persisted form.
    pub fn deserialize(layout: &str) -> Result<Self, LayoutError> {
        Ok(Self {
            epoch: None,
            slots: layout::deserialize(layout)?,
        })
    }

    /// Persisted form of the matrix.
    pub fn serialize(&self) -> String {
        layout::serialize(&self.slots)
    }

    /// The epoch this map was loaded for, if any.
    pub fn epoch(&self) -> Option<u32> {
        self.epoch
    }

    /// Bring the map in line with `epoch`.
    ///
    /// If the store holds a different epoch, the store is rewritten for the
    /// new epoch with an empty layout. The map is then loaded from the store.
    /// A layout that cannot be read is discarded in favour of an all-unknown map.
    pub fn reset_for_epoch<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        epoch: u32,
    ) -> Result<(), StoreError> {
        self.slots = [[Destination::Unknown; NDECISIONS]; NNODES];
        self.epoch = Some(epoch);

        let stored = store.get(EPOCH_KEY).and_then(|value| value.trim().parse::<u32>().ok());
        if stored != Some(epoch) {
            info!(?stored, epoch, "new epoch, forgetting learned map");
            // Layout first: a stale layout must never sit under the new epoch
            store.set(LAYOUT_KEY, "")?;
            store.set(EPOCH_KEY, &epoch.to_string())?;
            return Ok(());
        }

        let layout = store.get(LAYOUT_KEY).unwrap_or_default();
        match layout::deserialize(&layout) {
            Ok(slots) => self.slots = slots,
            Err(err) => warn!(%err, "discarding unreadable layout"),
        }
        Ok(())
    }

    /// Persist the map and its epoch.
    ///
    /// The layout is written before the epoch, so a failure part way leaves
    /// the store either unchanged or holding an epoch that no longer matches.
    pub fn save<S: PreferenceStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        store.set(LAYOUT_KEY, &self.serialize())?;
        if let Some(epoch) = self.epoch {
            store.set(EPOCH_KEY, &epoch.to_string())?;
        }
        Ok(())
    }

    /// The learned destinations of `node`'s three decisions.
    pub fn decisions(&self, node: NodeId) -> &[Destination; NDECISIONS] {
        &self.slots[node.index()]
    }

    /// The learned destination of one decision.
    pub fn get(&self, node: NodeId, decision: Decision) -> Destination {
        self.slots[node.index()][decision.slot()]
    }

    /// Whether nothing at all has been learned.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().flatten().all(|d| d.is_unknown())
    }

    /// Number of slots that hold a node or goal.
    pub fn known_count(&self) -> usize {
        self.slots.iter().flatten().filter(|d| !d.is_unknown()).count()
    }

    /// Record that taking `decision` at `node` led to `destination`.
    ///
    /// First write wins: if the slot is already known this is a no-op.
    /// After a write, the node's last unknown slot may be deduced.
    pub fn observe(
        &mut self,
        node: NodeId,
        decision: Decision,
        destination: Destination,
    ) -> Result<Observed, ObserveError> {
        if !destination.is_observed() {
            return Err(ObserveError::Unobservable(destination));
        }

        let slot = &mut self.slots[node.index()][decision.slot()];
        if !slot.is_unknown() {
            return Ok(Observed::AlreadyKnown);
        }
        *slot = destination;

        let deduced = self.deduce(node);
        if let Some((decision, destination)) = deduced {
            info!(%node, %decision, %destination, "deduced remaining exit");
        }
        Ok(Observed::Recorded { deduced })
    }

    /// Fill in the one remaining unknown slot of `node`, if it can be deduced.
    ///
    /// Only applies when exactly two slots are known. The candidate exits are
    /// scanned in order and the first one not already present is written.
    /// An `AnyEntry` candidate always counts as present, matching the unknown
    /// slot itself, so it is never deduced. Returns the slot written, if any.
    pub fn deduce(&mut self, node: NodeId) -> Option<(Decision, Destination)> {
        let slots = &mut self.slots[node.index()];

        let mut unknown = slots.iter().enumerate().filter(|(_, d)| d.is_unknown());
        let unknown_slot = match (unknown.next(), unknown.next()) {
            (Some((slot, _)), None) => slot,
            _ => return None,
        };

        for candidate in candidate_exits(node) {
            let present = slots.iter().any(|&learned| occurs(candidate, learned));
            if !present {
                slots[unknown_slot] = candidate;
                return Some((Decision::from_slot(unknown_slot), candidate));
            }
        }
        None
    }
}

impl Default for LearnedMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the candidate exit is accounted for by a learned slot.
///
/// The unknown slot stands in for any placeholder candidate.
fn occurs(candidate: Destination, learned: Destination) -> bool {
    match (candidate, learned) {
        (Destination::Unknown | Destination::AnyEntry, Destination::Unknown) => true,
        (candidate, learned) => candidate == learned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::path::PathBuf;

    /// Memory store whose layout writes fail while `broken` is set.
    #[derive(Default)]
    struct BrokenLayoutStore {
        inner: MemoryStore,
        broken: bool,
    }

    impl PreferenceStore for BrokenLayoutStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.broken && key == LAYOUT_KEY {
                return Err(StoreError::Io {
                    path: PathBuf::from("prefs.toml"),
                    source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
                });
            }
            self.inner.set(key, value)
        }
    }

    fn node(value: u8) -> NodeId {
        NodeId::new(value)
    }

    #[test]
    fn test_new_map_is_unknown() {
        let map = LearnedMap::new();
        assert!(map.is_empty());
        assert_eq!(map.known_count(), 0);
        assert_eq!(map.epoch(), None);
    }

    #[test]
    fn test_observe_first_write_wins() {
        let mut map = LearnedMap::new();
        let result = map.observe(node(96), Decision::Down, Destination::node(99));
        assert_eq!(result, Ok(Observed::Recorded { deduced: None }));

        let result = map.observe(node(96), Decision::Down, Destination::node(100));
        assert_eq!(result, Ok(Observed::AlreadyKnown));
        assert_eq!(map.get(node(96), Decision::Down), Destination::node(99));
    }

    #[test]
    fn test_observe_rejects_placeholders() {
        let mut map = LearnedMap::new();
        assert_eq!(
            map.observe(node(96), Decision::Up, Destination::Unknown),
            Err(ObserveError::Unobservable(Destination::Unknown))
        );
        assert_eq!(
            map.observe(node(96), Decision::Up, Destination::AnyEntry),
            Err(ObserveError::Unobservable(Destination::AnyEntry))
        );
        assert!(map.is_empty());
    }

    #[test]
    fn test_deduce_hub_exit() {
        // Hubs have three concrete exits, so two observations pin down the third
        let mut map = LearnedMap::new();
        map.observe(node(92), Decision::Sideways, Destination::node(96))
            .unwrap();
        let result = map
            .observe(node(92), Decision::Up, Destination::node(98))
            .unwrap();

        assert_eq!(
            result,
            Observed::Recorded {
                deduced: Some((Decision::Down, Destination::node(97)))
            }
        );
        assert_eq!(
            map.decisions(node(92)),
            &[
                Destination::node(98),
                Destination::node(97),
                Destination::node(96)
            ]
        );
    }

    #[test]
    fn test_deduce_concrete_exit_beside_hub() {
        let mut map = LearnedMap::new();
        map.observe(node(99), Decision::Up, Destination::node(94))
            .unwrap();
        map.observe(node(99), Decision::Down, Destination::goal(6))
            .unwrap();
        assert_eq!(map.get(node(99), Decision::Sideways), Destination::goal(3));
    }

    #[test]
    fn test_deduce_never_guesses_hub() {
        // Both concrete exits known: the hub exit is ambiguous and stays unknown
        let mut map = LearnedMap::new();
        map.observe(node(97), Decision::Up, Destination::node(101))
            .unwrap();
        let result = map
            .observe(node(97), Decision::Down, Destination::node(102))
            .unwrap();
        assert_eq!(result, Observed::Recorded { deduced: None });
        assert!(map.get(node(97), Decision::Sideways).is_unknown());
    }

    #[test]
    fn test_deduce_needs_two_known() {
        let mut map = LearnedMap::new();
        map.observe(node(93), Decision::Up, Destination::node(96))
            .unwrap();
        assert_eq!(map.deduce(node(93)), None);
        assert_eq!(map.known_count(), 1);
    }

    #[test]
    fn test_reset_new_epoch_clears() {
        let mut store = MemoryStore::new();
        let mut map = LearnedMap::new();
        map.reset_for_epoch(&mut store, 1).unwrap();
        map.observe(node(92), Decision::Up, Destination::node(96))
            .unwrap();
        map.save(&mut store).unwrap();

        let mut reloaded = LearnedMap::new();
        reloaded.reset_for_epoch(&mut store, 1).unwrap();
        assert_eq!(reloaded, map);

        reloaded.reset_for_epoch(&mut store, 2).unwrap();
        assert!(reloaded.is_empty());
        assert_eq!(reloaded.epoch(), Some(2));
        assert_eq!(store.get(EPOCH_KEY).as_deref(), Some("2"));
        assert_eq!(store.get(LAYOUT_KEY).as_deref(), Some(""));
    }

    #[test]
    fn test_reset_discards_corrupt_layout() {
        let mut store = MemoryStore::new();
        store.set(EPOCH_KEY, "5").unwrap();
        store.set(LAYOUT_KEY, "96,97").unwrap();

        let mut map = LearnedMap::new();
        map.reset_for_epoch(&mut store, 5).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_failed_reset_keeps_old_epoch() {
        let mut store = BrokenLayoutStore::default();
        let mut map = LearnedMap::new();
        map.reset_for_epoch(&mut store, 1).unwrap();
        map.observe(node(92), Decision::Up, Destination::node(96))
            .unwrap();
        map.save(&mut store).unwrap();

        store.broken = true;
        assert!(map.reset_for_epoch(&mut store, 2).is_err());
        assert_eq!(store.get(EPOCH_KEY).as_deref(), Some("1"));

        // The next session for epoch 2 must not inherit epoch 1's layout
        store.broken = false;
        let mut next = LearnedMap::new();
        next.reset_for_epoch(&mut store, 2).unwrap();
        assert!(next.is_empty());
        assert_eq!(store.get(EPOCH_KEY).as_deref(), Some("2"));
    }
}

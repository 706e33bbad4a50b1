// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use louvre_nav::config::NavigatorConfig;
use louvre_nav::context::Navigator;
use louvre_nav::state::LearnedMap;
use louvre_nav::store::{MemoryStore, PreferenceStore, StoreError, LAYOUT_KEY};
use louvre_nav::topology::{Decision, Destination, NodeId};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

/// The full layout used for the mapper golden code, as
/// `(node, [up, down, sideways])` with goals as 1..=6.
pub const FULL_LAYOUT: [(u8, [u8; 3]); 13] = [
    (92, [96, 97, 98]),
    (93, [97, 98, 96]),
    (94, [98, 96, 97]),
    (95, [96, 98, 97]),
    (96, [93, 99, 100]),
    (97, [101, 94, 102]),
    (98, [103, 104, 95]),
    (99, [3, 92, 6]),
    (100, [6, 1, 93]),
    (101, [4, 94, 1]),
    (102, [2, 4, 95]),
    (103, [5, 2, 92]),
    (104, [3, 5, 93]),
];

/// Mapper code for [`FULL_LAYOUT`].
pub const FULL_LAYOUT_CODE: &str = "b5bdb979bb5e9db9f66edb11";

/// A navigator over an in-memory store, bound to `epoch`.
pub fn memory_navigator(epoch: u32) -> Navigator<MemoryStore> {
    Navigator::open(MemoryStore::new(), NavigatorConfig::default(), epoch)
        .expect("memory store cannot fail")
}

/// Build a map directly from its persisted form, bypassing deduction.
pub fn map_from(entries: &[(u8, [u8; 3])]) -> LearnedMap {
    let mut codes = [[0u8; 3]; 13];
    for (node, exits) in entries {
        codes[(*node - 92) as usize] = *exits;
    }
    let layout = codes
        .iter()
        .flatten()
        .map(|code| code.to_string())
        .collect::<Vec<_>>()
        .join(",");
    LearnedMap::deserialize(&layout).expect("test layout must parse")
}

/// Decode a destination code used in the tables above.
pub fn destination(code: u8) -> Destination {
    Destination::from_code(code as i32).expect("test destination must be valid")
}

/// Observe every exit of `entries` in order, ignoring repeats.
pub fn observe_all(map: &mut LearnedMap, entries: &[(u8, [u8; 3])]) {
    for (node, exits) in entries {
        for (slot, code) in exits.iter().enumerate() {
            if *code != 0 {
                map.observe(NodeId::new(*node), Decision::from_slot(slot), destination(*code))
                    .expect("test observation must be valid");
            }
        }
    }
}

/// Memory store whose layout writes fail while the shared flag is set.
#[derive(Debug)]
pub struct BrokenLayoutStore {
    inner: MemoryStore,
    broken: Rc<Cell<bool>>,
}

impl BrokenLayoutStore {
    pub fn new(broken: &Rc<Cell<bool>>) -> Self {
        Self {
            inner: MemoryStore::new(),
            broken: Rc::clone(broken),
        }
    }
}

impl PreferenceStore for BrokenLayoutStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.broken.get() && key == LAYOUT_KEY {
            return Err(StoreError::Io {
                path: PathBuf::from("prefs.toml"),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }
        self.inner.set(key, value)
    }
}

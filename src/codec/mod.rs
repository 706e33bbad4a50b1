// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Export of the learned map as a third-party mapper code.
//!
//! The mapper accepts a 24-character hex string. Unpacked, it is 48 base-4
//! digits:
//!
//! - Digits 0..39: for each node in ordinal order, three digits, one per
//!   candidate exit in ascending ordinal order (the any-entry exit last).
//!   Each digit is the option (1 = up, 2 = down, 3 = sideways) that leads
//!   to that exit, or 0 if not yet learned.
//! - Digits 39..48: for each non-hub node in ordinal order, which hub its
//!   any-entry exit leads to, as the hub's offset from the first hub
//!   (1 = 93, 2 = 94, 3 = 95), or 0 if not yet learned. Hub 92 also
//!   reads as 0.
//!
//! Only encoding is supported.

pub mod ordinal;
pub mod packed;

pub use ordinal::{from_ordinal, to_ordinal, Ordinal, UNMAPPED};
pub use packed::{pack, CODE_DIGITS, CODE_LENGTH};

use crate::state::LearnedMap;
use crate::topology::constants::{NDECISIONS, NNODES};
use crate::topology::{candidate_exits, Decision, Destination, NodeId};
use ordinal::{node_at, HUB_ORDINALS};

/// Each node's candidate exits as ordinals sorted ascending, indexed by the
/// node's own ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitOrder {
    rows: [[Ordinal; NDECISIONS]; NNODES],
}

impl ExitOrder {
    /// Derive the table from the static candidate exits.
    pub fn build() -> Self {
        let mut rows = [[UNMAPPED; NDECISIONS]; NNODES];
        for node in NodeId::all() {
            let row = &mut rows[to_ordinal(Destination::Node(node)) as usize];
            for (slot, exit) in candidate_exits(node).into_iter().enumerate() {
                row[slot] = to_ordinal(exit);
            }
            row.sort_unstable();
        }
        Self { rows }
    }

    /// Sorted exit ordinals of the node with ordinal `ordinal`.
    pub fn exits(&self, ordinal: Ordinal) -> &[Ordinal; NDECISIONS] {
        &self.rows[ordinal as usize]
    }
}

/// Encoder for mapper codes.
#[derive(Debug, Clone)]
pub struct Codec {
    exit_order: ExitOrder,
}

impl Codec {
    pub fn new() -> Self {
        Self {
            exit_order: ExitOrder::build(),
        }
    }

    /// The base-4 digits describing `map`.
    pub fn digits(&self, map: &LearnedMap) -> [u8; CODE_DIGITS] {
        let mut digits = [0u8; CODE_DIGITS];
        let mut next = 0;

        for ordinal in 0..NNODES as Ordinal {
            let learned = map.decisions(node_at(ordinal));
            for &exit in self.exit_order.exits(ordinal) {
                digits[next] = exit_digit(learned, exit);
                next += 1;
            }
        }

        for ordinal in HUB_ORDINALS..NNODES as Ordinal {
            let learned = map.decisions(node_at(ordinal));
            digits[next] = learned
                .iter()
                .filter_map(|d| d.as_node())
                .find(|node| node.is_hub())
                .map_or(0, |hub| hub.index() as u8);
            next += 1;
        }

        debug_assert_eq!(next, CODE_DIGITS);
        digits
    }

    /// The packed mapper code for `map`.
    pub fn encode(&self, map: &LearnedMap) -> String {
        pack(&self.digits(map))
    }

    /// Link to the mapper showing `map`; `base` ends with the query parameter.
    pub fn mapper_url(&self, base: &str, map: &LearnedMap) -> String {
        format!("{}{}", base, self.encode(map))
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

/// The option leading to the exit with ordinal `exit`, or 0.
///
/// The unmapped exit stands for the any-entry exit and is matched by any hub.
fn exit_digit(learned: &[Destination; NDECISIONS], exit: Ordinal) -> u8 {
    for (slot, &destination) in learned.iter().enumerate() {
        let reached = to_ordinal(destination);
        if reached == UNMAPPED {
            continue;
        }
        let matched = if exit == UNMAPPED {
            reached < HUB_ORDINALS
        } else {
            reached == exit
        };
        if matched {
            return Decision::from_slot(slot).index();
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_order() {
        let order = ExitOrder::build();
        // Hubs lead to Munch (4), Botticelli (5) and Mondrian (6)
        assert_eq!(order.exits(0), &[4, 5, 6]);
        assert_eq!(order.exits(3), &[4, 5, 6]);
        // Mondrian (ordinal 6) leads to Michelangelo, David and a hub
        assert_eq!(order.exits(6), &[11, 12, UNMAPPED]);
        // Michelangelo (ordinal 11) leads to Moxie, Pinot Renoir and a hub
        assert_eq!(order.exits(11), &[15, 18, UNMAPPED]);
    }

    #[test]
    fn test_empty_map() {
        let codec = Codec::new();
        let code = codec.encode(&LearnedMap::new());
        assert_eq!(code, "0".repeat(CODE_LENGTH));
    }

    #[test]
    fn test_partial_map() {
        let codec = Codec::new();
        let mut map = LearnedMap::new();
        map.observe(NodeId::new(92), Decision::Up, Destination::node(97))
            .unwrap();
        map.observe(NodeId::new(92), Decision::Down, Destination::node(96))
            .unwrap();
        map.observe(NodeId::new(97), Decision::Up, Destination::node(93))
            .unwrap();

        let digits = codec.digits(&map);
        // 92 deduced sideways to 98: 97 by up, 98 by sideways, 96 by down
        assert_eq!(&digits[0..3], &[1, 3, 2]);
        // Munch's hub exit is up, and it reaches hub 93
        assert_eq!(digits[14], 1);
        assert_eq!(digits[39], 1);

        assert_eq!(codec.encode(&map), "780000040000000000010000");
    }

    #[test]
    fn test_hub_92_reads_as_unlearned() {
        let codec = Codec::new();
        let mut map = LearnedMap::new();
        map.observe(NodeId::new(97), Decision::Down, Destination::node(92))
            .unwrap();
        let digits = codec.digits(&map);
        assert_eq!(digits[14], 2);
        assert_eq!(digits[39], 0);
    }

    #[test]
    fn test_mapper_url() {
        let codec = Codec::new();
        let url = codec.mapper_url("http://example.com/map?code=", &LearnedMap::new());
        assert_eq!(url, format!("http://example.com/map?code={}", "0".repeat(24)));
    }
}

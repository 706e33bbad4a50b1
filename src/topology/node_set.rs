// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! NodeSet type for representing sets of nodes as bitsets.
//!
//! Used as the visited set of a path query: bit i is set once the node with
//! index i has been entered on the current search.
//!
//! # Examples
//!
//! ```
//! use louvre_nav::topology::{NodeId, NodeSet};
//!
//! let mut visited = NodeSet::single(NodeId::new(96));
//! visited.insert(NodeId::new(99));
//!
//! assert_eq!(visited.len(), 2);
//! assert!(visited.contains(NodeId::new(99)));
//! assert!(!visited.contains(NodeId::new(100)));
//! ```

use crate::topology::NodeId;
use std::fmt;

/// A set of nodes represented as a bitset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeSet(u16);

impl NodeSet {
    /// Create an empty node set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a set holding only `node`.
    pub fn single(node: NodeId) -> Self {
        let mut set = Self::empty();
        set.insert(node);
        set
    }

    pub fn contains(self, node: NodeId) -> bool {
        (self.0 >> node.index()) & 1 != 0
    }

    pub fn insert(&mut self, node: NodeId) {
        self.0 |= 1 << node.index();
    }

    /// Number of nodes in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the nodes in the set in ascending order.
    pub fn iter(self) -> impl Iterator<Item = NodeId> {
        NodeId::all().filter(move |&node| self.contains(node))
    }
}

impl fmt::Display for NodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, "}}")
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Caller-supplied override directives.
//!
//! An override is a comma-separated list such as `"up, down, sideways"`.
//! Entry N is taken at step N of a trip through the gallery, ahead of any
//! routing strategy. A string without a comma disables overrides.

use crate::topology::Decision;

/// Parsed override directives, indexed by step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    directives: Vec<Decision>,
}

impl Overrides {
    /// No overrides.
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse a directive list.
    ///
    /// Entries are split on commas together with any whitespace around them;
    /// whitespace at either end of the whole string is kept, so `" up"` is not
    /// "up". Trailing empty entries are dropped. Any entry other than "up" or
    /// "down" (in any case) means sideways.
    pub fn parse(text: &str) -> Self {
        if !text.contains(',') {
            return Self::none();
        }

        let pieces: Vec<&str> = text.split(',').collect();
        let last = pieces.len() - 1;
        let mut entries: Vec<&str> = pieces
            .into_iter()
            .enumerate()
            .map(|(i, piece)| {
                let piece = if i > 0 { piece.trim_start() } else { piece };
                if i < last {
                    piece.trim_end()
                } else {
                    piece
                }
            })
            .collect();
        while entries.last().is_some_and(|entry| entry.is_empty()) {
            entries.pop();
        }

        Self {
            directives: entries.into_iter().map(Decision::from_directive).collect(),
        }
    }

    /// The directive for `step`, if the list reaches that far.
    pub fn directive(&self, step: usize) -> Option<Decision> {
        self.directives.get(step).copied()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

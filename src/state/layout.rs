// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Persisted form of the learned map.
//!
//! The matrix is flattened node-major, slot-minor, each destination written
//! as its decimal code and joined with commas:
//!
//! ```text
//! 96,0,98, 0,0,0, ... (39 values, no spaces)
//! ```
//!
//! An empty string is an all-unknown map.

use crate::topology::constants::{NDECISIONS, NNODES};
use crate::topology::Destination;
use thiserror::Error;

/// Number of values in a persisted layout.
pub const LAYOUT_LENGTH: usize = NNODES * NDECISIONS;

/// A persisted layout that cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has {actual} values, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("layout value {position} is not a destination: {token:?}")]
    BadValue { position: usize, token: String },
}

/// Write a slot matrix in persisted form.
pub fn serialize(slots: &[[Destination; NDECISIONS]; NNODES]) -> String {
    slots
        .iter()
        .flatten()
        .map(|destination| destination.code().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Read a slot matrix from persisted form.
///
/// The empty string reads as all-unknown. Anything else must hold exactly
/// `LAYOUT_LENGTH` decodable values.
pub fn deserialize(layout: &str) -> Result<[[Destination; NDECISIONS]; NNODES], LayoutError> {
    let mut slots = [[Destination::Unknown; NDECISIONS]; NNODES];
    if layout.is_empty() {
        return Ok(slots);
    }

    let tokens: Vec<&str> = layout.split(',').collect();
    if tokens.len() != LAYOUT_LENGTH {
        return Err(LayoutError::WrongLength {
            expected: LAYOUT_LENGTH,
            actual: tokens.len(),
        });
    }

    for (position, token) in tokens.iter().enumerate() {
        let destination = token
            .trim()
            .parse::<i32>()
            .ok()
            .and_then(Destination::from_code)
            .ok_or_else(|| LayoutError::BadValue {
                position,
                token: token.to_string(),
            })?;
        slots[position / NDECISIONS][position % NDECISIONS] = destination;
    }

    Ok(slots)
}

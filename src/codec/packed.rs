// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Packing base-4 digits into the mapper's hex string.
//!
//! Each pair of base-4 digits `(d0, d1)` becomes one hex character
//! `d0 * 4 + d1`, so 48 digits pack into 24 characters.

/// Number of base-4 digits in a map code.
pub const CODE_DIGITS: usize = 48;

/// Number of characters in a packed map code.
pub const CODE_LENGTH: usize = CODE_DIGITS / 2;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Pack base-4 digits two per hex character.
///
/// # Panics
///
/// Panics if any digit is not in 0..4.
pub fn pack(digits: &[u8; CODE_DIGITS]) -> String {
    digits
        .chunks_exact(2)
        .map(|pair| {
            assert!(pair[0] < 4 && pair[1] < 4, "Not a base-4 digit: {:?}", pair);
            HEX[(pair[0] * 4 + pair[1]) as usize] as char
        })
        .collect()
}

// -*- mode: rust; -*-
//
// This file is part of scalar-wnaf.
// See LICENSE for licensing information.

//! Bit-window extraction out of little-endian words.

use byteorder::{ByteOrder, LittleEndian};

/// Load a 32-byte little-endian buffer into five `u64` words.
///
/// The fifth word is always zero, so that a window read starting
/// anywhere below bit 256 can spill into the next word without
/// special-casing the top of the scalar.
pub(crate) fn words_from_le_bytes(bytes: &[u8; 32]) -> [u64; 5] {
    let mut words = [0u64; 5];
    LittleEndian::read_u64_into(&bytes[..], &mut words[..4]);
    words
}

/// Extract bits `[pos, pos+w)` as an unsigned value, zero-padded
/// beyond bit 255.
pub(crate) fn bit_window(words: &[u64; 5], pos: usize, w: usize) -> u64 {
    debug_assert!(pos < 256);
    debug_assert!(w >= 1);
    debug_assert!(w <= 8);

    let word_idx = pos / 64; // which word to read
    let bit_idx = pos % 64; // which bit within that word

    let bit_buf = if bit_idx < 64 - w {
        // The window fits in a single word.
        words[word_idx] >> bit_idx
    } else {
        // The window straddles a word boundary; combine the high bits
        // of this word with the low bits of the next.
        (words[word_idx] >> bit_idx) | (words[word_idx + 1] << (64 - bit_idx))
    };

    bit_buf & ((1 << w) - 1)
}

// -*- mode: rust; -*-
//
// This file is part of scalar-wnaf.
// See LICENSE for licensing information.

//! Digit sequences and reconstruction back to scalar bytes.

use byteorder::{ByteOrder, LittleEndian};

use core::ops::Index;

/// A width-`w` non-adjacent form: one signed digit per bit position,
/// so that the source scalar \\(k\\) satisfies
/// \\(k \equiv \sum_i d_i 2^i \pmod{2^{256}}\\).
///
/// There is no extra trailing digit: a carry out of position 255 is
/// dropped, which is why the congruence above is stated modulo
/// \\(2^{256}\\) rather than as an equality.  Every nonzero digit is
/// odd with \\(|d_i| < 2^{w-1}\\), and after a nonzero digit the next
/// `w - 1` digits are zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NafDigits(pub(crate) [i8; 256]);

impl NafDigits {
    /// The fixed number of digit positions.
    pub const LENGTH: usize = 256;

    /// View the digits as a fixed-size array, least significant first.
    pub fn digits(&self) -> &[i8; 256] {
        &self.0
    }

    /// View the digits as a slice, least significant first.
    pub fn as_slice(&self) -> &[i8] {
        &self.0[..]
    }

    /// Iterate over the digits, least significant first.
    pub fn iter(&self) -> core::slice::Iter<'_, i8> {
        self.0.iter()
    }
}

impl Index<usize> for NafDigits {
    type Output = i8;

    fn index(&self, index: usize) -> &i8 {
        &self.0[index]
    }
}

impl From<NafDigits> for [i8; 256] {
    fn from(naf: NafDigits) -> [i8; 256] {
        naf.0
    }
}

/// Evaluate a signed digit sequence back to scalar bytes:
/// \\(\sum_i d_i 2^{ri}\\) reduced modulo \\(2^{256}\\), where
/// `r = radix_log2`, returned as 32 little-endian bytes.
///
/// The modulus is exactly \\(2^{256}\\): the accumulation wraps, so a
/// digit sequence whose top carry was dropped still round-trips to the
/// low 256 bits of its source.  Verification only; this is not meant
/// for a hot path.
///
/// Use `radix_log2 = 1` for [`NafDigits`] (one digit per bit) and
/// `radix_log2 = 2` for the width-2 digits of the [`legacy`](crate::legacy)
/// scan.
pub fn reconstruct(digits: &[i8], radix_log2: usize) -> [u8; 32] {
    debug_assert!(radix_log2 >= 1);
    debug_assert!(radix_log2 <= 8);

    let mut acc = [0u64; 4];
    for (i, &d) in digits.iter().enumerate() {
        let shift = radix_log2 * i;
        if shift >= 256 {
            break;
        }
        if d > 0 {
            add_shifted(&mut acc, d as u64, shift);
        } else if d < 0 {
            sub_shifted(&mut acc, -(d as i64) as u64, shift);
        }
    }

    let mut bytes = [0u8; 32];
    LittleEndian::write_u64_into(&acc, &mut bytes);
    bytes
}

/// Spread `v << shift` across four words; bits above 2^256 are lost.
fn shifted_term(v: u64, shift: usize) -> [u64; 4] {
    let word = shift / 64;
    let bit = shift % 64;

    let mut term = [0u64; 4];
    term[word] = v << bit;
    if bit != 0 && word + 1 < 4 {
        term[word + 1] = v >> (64 - bit);
    }
    term
}

fn add_shifted(acc: &mut [u64; 4], v: u64, shift: usize) {
    let term = shifted_term(v, shift);
    let mut carry = 0u64;
    for i in 0..4 {
        let (sum, c1) = acc[i].overflowing_add(term[i]);
        let (sum, c2) = sum.overflowing_add(carry);
        acc[i] = sum;
        carry = (c1 as u64) + (c2 as u64);
    }
    // A final carry falls off the top: arithmetic is mod 2^256.
}

fn sub_shifted(acc: &mut [u64; 4], v: u64, shift: usize) {
    let term = shifted_term(v, shift);
    let mut borrow = 0u64;
    for i in 0..4 {
        let (diff, b1) = acc[i].overflowing_sub(term[i]);
        let (diff, b2) = diff.overflowing_sub(borrow);
        acc[i] = diff;
        borrow = (b1 as u64) | (b2 as u64);
    }
}

// -*- mode: rust; -*-
//
// This file is part of scalar-wnaf.
// See LICENSE for licensing information.

//! The textbook recoder: the correctness baseline.

use byteorder::{ByteOrder, LittleEndian};

use crate::digits::NafDigits;
use crate::recode::Recoder;
use crate::scalar::Scalar;

/// The textbook width-`w` NAF loop (Hankerson, Menezes, Vanstone;
/// alg 3.35), run on a mutable working copy of the scalar:
///
/// ```text
/// while x >= 1:
///     if x is odd:
///         d = x mods 2^w
///         emit d
///         x = x - d
///     else:
///         emit 0
///     x = x / 2
/// ```
///
/// Here `mods` is reduction to the signed representatives
/// \\(-2^{w-1}, \ldots, 0, \ldots, 2^{w-1} - 1\\).  Subtracting the
/// signed residue zeroes the low `w` bits of `x`, which is what forces
/// the `w - 1` zero digits after every nonzero digit.
///
/// This strategy mutates a 320-bit working value on every step and is
/// the slow, obviously-correct baseline that [`SinglePass`] is tested
/// against.
///
/// [`SinglePass`]: crate::recode::SinglePass
pub struct Schoolbook;

impl Recoder for Schoolbook {
    fn recode(scalar: &Scalar, w: usize) -> NafDigits {
        debug_assert!(w >= 2);
        debug_assert!(w <= 8);

        let mut naf = [0i8; 256];

        let width = 1i64 << w;
        let mut x = Wide::from_scalar(scalar);

        let mut pos = 0;
        while pos < 256 && !x.is_zero() {
            if x.is_odd() {
                let residue = x.low_bits(w) as i64;
                let digit = if residue < width / 2 {
                    residue
                } else {
                    residue - width
                };
                naf[pos] = digit as i8;
                if digit < 0 {
                    x.add_small(-digit as u64);
                } else {
                    x.sub_small(digit as u64);
                }
            }
            x.shr1();
            pos += 1;
        }
        // Digits past position 255 (a final carry pushed out the top)
        // are dropped; see NafDigits for the modulus this implies.

        NafDigits(naf)
    }
}

/// A 320-bit working value.  One spare word of headroom is enough:
/// adding back a negative digit can push the value just past 2^256,
/// and every step afterwards only shrinks it.
struct Wide([u64; 5]);

impl Wide {
    fn from_scalar(scalar: &Scalar) -> Wide {
        let mut words = [0u64; 5];
        LittleEndian::read_u64_into(scalar.as_bytes(), &mut words[..4]);
        Wide(words)
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(|&word| word == 0)
    }

    fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    fn low_bits(&self, w: usize) -> u64 {
        self.0[0] & ((1 << w) - 1)
    }

    fn shr1(&mut self) {
        for i in 0..4 {
            self.0[i] = (self.0[i] >> 1) | (self.0[i + 1] << 63);
        }
        self.0[4] >>= 1;
    }

    fn add_small(&mut self, v: u64) {
        let mut carry = v;
        for word in self.0.iter_mut() {
            if carry == 0 {
                return;
            }
            let (sum, overflow) = word.overflowing_add(carry);
            *word = sum;
            carry = overflow as u64;
        }
    }

    fn sub_small(&mut self, v: u64) {
        let mut borrow = v;
        for word in self.0.iter_mut() {
            if borrow == 0 {
                return;
            }
            let (diff, underflow) = word.overflowing_sub(borrow);
            *word = diff;
            borrow = underflow as u64;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wide_shifts_across_word_boundaries() {
        let mut x = Wide([0, 1, 0, 0, 0]);
        x.shr1();
        assert_eq!(x.0, [1 << 63, 0, 0, 0, 0]);
    }

    #[test]
    fn wide_add_carries_through_full_words() {
        let mut x = Wide([u64::MAX, u64::MAX, 0, 0, 0]);
        x.add_small(1);
        assert_eq!(x.0, [0, 0, 1, 0, 0]);
    }

    #[test]
    fn wide_sub_borrows_through_empty_words() {
        let mut x = Wide([0, 0, 1, 0, 0]);
        x.sub_small(1);
        assert_eq!(x.0, [u64::MAX, u64::MAX, 0, 0, 0]);
    }
}

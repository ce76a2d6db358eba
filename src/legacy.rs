// -*- mode: rust; -*-
//
// This file is part of scalar-wnaf.
// See LICENSE for licensing information.

//! Recorded behavior of the retired width-2 digit scan.
//!
//! An earlier recoding routine read the 2-bit window at every
//! successive *bit* offset, so that consecutive windows overlapped by
//! one bit, and signed-reduced each running value into
//! `{-2, -1, 0, 1}`.  Because
//! consecutive windows re-read a bit that consecutive radix-4 digit
//! positions do not share, the 128 digits it emits are **not** a
//! radix-4 expansion of the input: evaluating them as
//! \\(\sum_i d_i 4^i\\) yields a different integer than the scalar.
//!
//! The scan is kept here, bug for bug, so that its recorded
//! golden output (see `tests/fixture.rs`) stays pinned while the
//! value-preserving recoders in [`recode`](crate::recode) carry the
//! actual contract.  Only width 2 was ever recorded, so only width 2
//! is reproduced.

use crate::scalar::Scalar;
use crate::window;

/// Run the retired width-2 digit scan: 128 digits in `{-2, -1, 0, 1}`,
/// one per *bit* offset `0..128`, windows overlapping by one bit.
///
/// Not value-preserving; see the module docs.  Do not use this for
/// scalar multiplication.
pub fn overlapped_radix4_digits(scalar: &Scalar) -> [i8; 128] {
    let words = window::words_from_le_bytes(scalar.as_bytes());

    let mut digits = [0i8; 128];
    let mut carry = 0i64;
    for (i, digit) in digits.iter_mut().enumerate() {
        let window = carry + window::bit_window(&words, i, 2) as i64;
        if window < 2 {
            carry = 0;
            *digit = window as i8;
        } else {
            carry = 1;
            *digit = (window - 4) as i8;
        }
    }
    // A carry owed after the last window is dropped, like everything
    // else about this scan.

    digits
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn digits_stay_in_the_signed_radix_4_range() {
        // 0xb5 = 0b10110101: enough bit structure to hit every branch.
        let mut bytes = [0u8; 32];
        bytes[0] = 0xb5;
        bytes[1] = 0xff;
        let s = Scalar::from_bytes(bytes);
        for d in overlapped_radix4_digits(&s) {
            assert!((-2..=1).contains(&d));
        }
    }

    #[test]
    fn zero_scalar_scans_to_zero_digits() {
        let s = Scalar::from_bytes([0u8; 32]);
        assert_eq!(overlapped_radix4_digits(&s), [0i8; 128]);
    }
}

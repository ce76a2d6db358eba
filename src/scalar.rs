// -*- mode: rust; -*-
//
// This file is part of scalar-wnaf.
// See LICENSE for licensing information.

//! The 32-byte little-endian scalar buffer.

use core::fmt::Debug;
use core::ops::Index;

use rand_core::{CryptoRng, RngCore};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::digits::NafDigits;
use crate::errors::ScalarLengthError;
use crate::recode::{Recoder, SinglePass};
use crate::window;

/// A 256-bit unsigned integer, stored as 32 bytes in little-endian
/// order (byte 0 is least significant).
///
/// The buffer is immutable once constructed: recoding reads it, never
/// writes it.  No reduction modulo a group order is performed here;
/// the recoders are defined over the full 256-bit range.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Scalar {
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    /// Construct a `Scalar` from 32 little-endian bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Scalar {
        Scalar { bytes }
    }

    /// Construct a `Scalar` from a `u64`.
    pub fn from_u64(x: u64) -> Scalar {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&x.to_le_bytes());
        Scalar { bytes }
    }

    /// Return a `Scalar` chosen uniformly at random from the full
    /// 256-bit range, using the supplied CSPRNG.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Scalar { bytes }
    }

    /// View this `Scalar` as a sequence of bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Convert this `Scalar` to its underlying sequence of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// Extract bits `[pos, pos+w)` of the scalar as an unsigned value,
    /// zero-padded beyond bit 255.
    ///
    /// Requires `pos < 256` and `1 <= w <= 8`.
    pub fn bit_window(&self, pos: usize, w: usize) -> u64 {
        let words = window::words_from_le_bytes(&self.bytes);
        window::bit_window(&words, pos, w)
    }

    /// Compute a width-`w` non-adjacent form of this scalar, using the
    /// single-pass recoder.
    ///
    /// See the [`recode`](crate::recode) module for the digit contract.
    pub fn non_adjacent_form(&self, w: usize) -> NafDigits {
        SinglePass::recode(self, w)
    }
}

impl Index<usize> for Scalar {
    type Output = u8;

    /// Index the bytes of the `Scalar`.
    fn index(&self, index: usize) -> &u8 {
        &self.bytes[index]
    }
}

impl TryFrom<&[u8]> for Scalar {
    type Error = ScalarLengthError;

    /// Construct a `Scalar` from a slice of bytes, failing if the
    /// slice is not exactly 32 bytes long.
    fn try_from(bytes: &[u8]) -> Result<Scalar, ScalarLengthError> {
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| ScalarLengthError { length: bytes.len() })?;
        Ok(Scalar { bytes })
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{ bytes: {:?} }}", &self.bytes)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_u64() {
        let val: u64 = 0xdead_beef_dead_beef;
        let s = Scalar::from_u64(val);
        assert_eq!(s[7], 0xde);
        assert_eq!(s[6], 0xad);
        assert_eq!(s[5], 0xbe);
        assert_eq!(s[4], 0xef);
        assert_eq!(s[8], 0x00);
        assert_eq!(s[31], 0x00);
    }

    #[test]
    fn try_from_rejects_wrong_lengths() {
        assert_eq!(
            Scalar::try_from(&[0u8; 31][..]),
            Err(ScalarLengthError { length: 31 })
        );
        assert_eq!(
            Scalar::try_from(&[0u8; 33][..]),
            Err(ScalarLengthError { length: 33 })
        );
        assert!(Scalar::try_from(&[0u8; 32][..]).is_ok());
    }

    #[test]
    fn bit_window_reads_the_byte_boundary() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x80;
        bytes[1] = 0x01;
        let s = Scalar::from_bytes(bytes);
        assert_eq!(s.bit_window(7, 2), 0b11);
        assert_eq!(s.bit_window(8, 2), 0b01);
    }
}

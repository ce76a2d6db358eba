// -*- mode: rust; -*-
//
// This file is part of scalar-wnaf.
// See LICENSE for licensing information.

//! The two recoding strategies.
//!
//! Both strategies implement [`Recoder`] and must produce identical
//! output on every input; they are proven equivalent by differential
//! testing rather than by sharing code.  A recoding run is a scan over
//! bit positions, least significant first, carrying at most one bit of
//! state:
//!
//! * at an even running value (window plus carry), the position
//!   contributes nothing and the scan advances one bit;
//! * at an odd running value below \\(2^{w-1}\\), the value itself is
//!   emitted and the scan advances `w` bits;
//! * at an odd running value at or above \\(2^{w-1}\\), the value
//!   minus \\(2^w\\) is emitted, a carry of one is owed to the next
//!   window, and the scan advances `w` bits;
//! * the scan is done once all 256 positions are consumed; a carry
//!   still owed at that point is dropped (see
//!   [`NafDigits`](crate::digits::NafDigits) for the resulting
//!   modulus).
//!
//! Digits are emitted in strictly increasing position order; the
//! non-adjacency invariant depends on that sequencing.

mod schoolbook;
mod single_pass;

pub use self::schoolbook::Schoolbook;
pub use self::single_pass::SinglePass;

use crate::digits::NafDigits;
use crate::scalar::Scalar;

/// A strategy for recoding a scalar into width-`w` non-adjacent form.
pub trait Recoder {
    /// Recode `scalar` into width-`w` non-adjacent form.
    ///
    /// Requires `2 <= w <= 8` (so every digit fits an `i8`); this is
    /// checked with `debug_assert!`.  Total over all 256-bit scalars.
    fn recode(scalar: &Scalar, w: usize) -> NafDigits;
}

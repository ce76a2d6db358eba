// -*- mode: rust; -*-
//
// This file is part of scalar-wnaf.
// See LICENSE for licensing information.

//! The single-pass recoder: masked window reads and a carry bit.

use crate::digits::NafDigits;
use crate::recode::Recoder;
use crate::scalar::Scalar;
use crate::window;

/// A single left-to-right pass over the bit positions, replacing the
/// textbook loop's working-copy mutation with window reads and one
/// carry bit.
///
/// Write the bits of \\(x\\) as \\(x_0, \ldots, x_{255}\\).  At scan
/// position \\(p\\) the running value is the `w`-bit window
/// \\(x_p + x_{p+1} 2 + \cdots + x_{p+w-1} 2^{w-1}\\) plus the carry
/// owed by the previous window.  If that value is below \\(2^{w-1}\\)
/// it *is* the signed residue `mods` \\(2^w\\), so emitting it and
/// advancing `w` bits matches the textbook subtract-and-shift exactly;
/// if it is \\(2^{w-1}\\) or more, the residue is the value minus
/// \\(2^w\\), and the subtraction the textbook loop would perform is
/// deferred as a carry of one into the next window instead of being
/// applied to the scalar.  No position is read twice and nothing is
/// divided.
///
/// Must be digit-for-digit identical to
/// [`Schoolbook`](crate::recode::Schoolbook) on every input; any
/// divergence is a defect here, not a feature.
pub struct SinglePass;

impl Recoder for SinglePass {
    fn recode(scalar: &Scalar, w: usize) -> NafDigits {
        debug_assert!(w >= 2);
        debug_assert!(w <= 8);

        let mut naf = [0i8; 256];

        let words = window::words_from_le_bytes(scalar.as_bytes());
        let width = 1u64 << w;

        let mut pos = 0;
        let mut carry = 0;
        while pos < 256 {
            let window = carry + window::bit_window(&words, pos, w);

            if window & 1 == 0 {
                // An even running value contributes nothing here; any
                // pending carry stays owed to a later window.
                pos += 1;
                continue;
            }

            if window < width / 2 {
                carry = 0;
                naf[pos] = window as i8;
            } else {
                carry = 1;
                naf[pos] = (window as i64 - width as i64) as i8;
            }

            // The next w-1 digits are already zero; skip straight over
            // them.  A carry owed past position 255 is dropped.
            pos += w;
        }

        NafDigits(naf)
    }
}

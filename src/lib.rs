// -*- mode: rust; -*-
//
// This file is part of scalar-wnaf.
// See LICENSE for licensing information.

#![no_std]
#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/scalar-wnaf/0.1.0")]

//! Windowed non-adjacent form recoding for 256-bit scalars.
//!
//! A width-\\(w\\) NAF of a positive integer \\(k\\) is an expression
//! \\(k = \sum_i k_i 2^i\\) where each nonzero coefficient \\(k_i\\) is
//! odd and bounded by \\(|k_i| < 2^{w-1}\\), and at most one of any
//! \\(w\\) consecutive coefficients is nonzero (Hankerson, Menezes,
//! Vanstone; def 3.32).  A double-and-add scalar multiplication driven
//! by such digits performs a point addition only at the sparse nonzero
//! positions, with precomputed odd multiples supplying the addends.
//!
//! This crate recodes a 32-byte little-endian scalar into that digit
//! form.  Two recoding strategies share one contract:
//!
//! * [`Schoolbook`](recode::Schoolbook) follows the textbook loop on a
//!   mutable working copy of the scalar.  It is the correctness
//!   baseline.
//! * [`SinglePass`](recode::SinglePass) replaces the textbook loop's
//!   divisions and re-scans with masked window reads and a carry bit,
//!   visiting each bit position at most once.  It must produce output
//!   byte-identical to `Schoolbook` on every input; it is only allowed
//!   to be faster, never different.
//!
//! [`digits::reconstruct`] maps a digit sequence back to scalar bytes
//! under an explicit modulus of \\(2^{256}\\), for verification.  The
//! [`legacy`] module preserves the recorded output of an earlier,
//! non-value-preserving width-2 digit scan as regression data.

#[cfg(feature = "std")]
extern crate std;

//------------------------------------------------------------------------
// Public modules
//------------------------------------------------------------------------

// The 32-byte little-endian scalar buffer.
pub mod scalar;

// Digit sequences and reconstruction back to scalar bytes.
pub mod digits;

// The two recoding strategies.
pub mod recode;

// Recorded behavior of the retired width-2 digit scan.
pub mod legacy;

// Errors which can occur constructing a scalar from bytes.
pub mod errors;

//------------------------------------------------------------------------
// Internal modules
//------------------------------------------------------------------------

// Bit-window extraction out of little-endian words.
pub(crate) mod window;

pub use crate::digits::NafDigits;
pub use crate::errors::ScalarLengthError;
pub use crate::recode::{Recoder, Schoolbook, SinglePass};
pub use crate::scalar::Scalar;

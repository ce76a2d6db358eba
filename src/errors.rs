// -*- mode: rust; -*-
//
// This file is part of scalar-wnaf.
// See LICENSE for licensing information.

//! Errors which may occur when constructing a scalar from bytes.

use core::fmt;
use core::fmt::Display;

/// An error in the length of bytes handed to a [`Scalar`](crate::Scalar)
/// constructor.
///
/// Scalars are exactly 32 bytes; this is the only invalid input the
/// crate can be handed.  Recoding itself is total and never errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ScalarLengthError {
    pub(crate) length: usize,
}

impl Display for ScalarLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar must be 32 bytes in length, got {}", self.length)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScalarLengthError {}

//! Error type for the fallible operations of this crate.
//!
//! Validation is eager: every constructor and conversion checks its inputs
//! before writing any bit pattern, so a rejected operation never leaves a
//! value partially updated. String parsing is deliberately not represented
//! here; the parser is lenient by contract and reports how much input it
//! consumed instead (see [`crate::radix`]).

use std::fmt;

/// Errors reported by radix formatting and binary64 construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested radix lies outside the supported range `2..=36`.
    RadixOutOfRange(u32),
    /// The destination buffer is shorter than the 65 bytes formatting
    /// requires for the worst case (64 binary digits plus a terminator slot).
    BufferTooSmall(usize),
    /// The unbiased exponent lies outside `[-1023, 1024]`.
    ExponentOutOfRange(i32),
    /// Mantissa bit 52 (the implicit leading one) is inconsistent with the
    /// supplied exponent: it must be set for a normal exponent and clear for
    /// the boundary exponents −1023 and 1024.
    MantissaBit52 {
        /// The exponent the mantissa was checked against.
        exponent: i32,
        /// Whether bit 52 was set in the rejected mantissa.
        set: bool,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::RadixOutOfRange(radix) => {
                write!(f, "radix must be between 2 and 36, got {radix}")
            }
            Error::BufferTooSmall(len) => {
                write!(f, "destination buffer must hold at least 65 bytes, got {len}")
            }
            Error::ExponentOutOfRange(exponent) => {
                write!(f, "exponent must be between -1023 and 1024, got {exponent}")
            }
            Error::MantissaBit52 { exponent, set } => {
                if set {
                    write!(
                        f,
                        "mantissa for zero/subnormal/infinity/NaN (exponent {exponent}) must not have bit 52 set"
                    )
                } else {
                    write!(
                        f,
                        "mantissa of a normal double (exponent {exponent}) must have bit 52 set"
                    )
                }
            }
        }
    }
}

impl std::error::Error for Error {}

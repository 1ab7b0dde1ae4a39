#![warn(missing_docs)]
// bit manipulation generally doesn't care about sign, so the caller is aware of the consequences
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]

//! This crate provides exact 64-bit integer arithmetic and bit-exact
//! construction/decomposition of IEEE-754 binary64 doubles, for callers whose
//! native numeric type cannot hold a full 64-bit integer losslessly.
//!
//! # Value types
//!  - [`UInt64`] — a 64-bit value under the unsigned interpretation, with a
//!    full in-place operation set: arithmetic, bitwise, shifts and rotates,
//!    comparisons, and carry-propagating addition/subtraction for chaining
//!    exact arithmetic beyond 64 bits.
//!  - [`Int64`] — the same bit pattern and operation set under the signed
//!    (two's-complement) interpretation, which changes construction from
//!    halves, string sign handling, ordering and default rendering.
//!
//! # Binary64 codec
//! [`binary64`] builds a double from an explicit (sign, 53-bit mantissa with
//! the implicit bit made explicit, unbiased exponent) triple and splits a
//! double back into that triple, classifying zero, subnormals, infinity and
//! NaN. Only bit patterns are touched; no floating-point arithmetic is
//! performed.
//!
//! # Primitives
//! The value types are composed from small total primitives that are also
//! public: bit counts ([`bits`]), masked shifts and rotates ([`shifts`]),
//! carry/borrow propagation ([`carry`]) and radix 2–36 string conversion
//! ([`radix`]). Every primitive is defined for every input, including zero
//! counts and oversized shift amounts, so none of them can fail at runtime.
//!
//! # Concurrency
//! All types are plain `Copy` values and all free functions are stateless;
//! everything is safe to use from any number of threads as long as a single
//! value is not mutated concurrently. Nothing blocks and nothing allocates
//! except string formatting.

pub use binary64::{DoubleParts, Sign};
pub use bits::{clz32, ctz32, popcnt32};
pub use error::Error;
pub use int64::{Int64, UInt64};

pub mod binary64;
pub mod bits;
pub mod carry;
pub mod error;
pub mod int64;
pub mod radix;
pub mod shifts;

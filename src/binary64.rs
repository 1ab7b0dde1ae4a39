//! Bit-exact construction and decomposition of IEEE-754 binary64 doubles.
//!
//! A double is handled as the triple (sign, mantissa, exponent): the mantissa
//! carries the 52 stored fraction bits plus the implicit leading one as an
//! explicit bit 52, and the exponent is unbiased, ranging over
//! `[-1023, 1024]` where the two boundary values encode zero/subnormals and
//! infinity/NaN respectively.
//!
//! Only the direct bit-reinterpretation path exists here: Rust defines `f64`
//! as an IEEE-754 binary64 value on every target and `f64::from_bits`/
//! `to_bits` transmute without touching the FPU, so no math-library fallback
//! is needed.

use crate::error::Error;

/// Mask of the 52 stored fraction bits of a binary64 value.
pub const MANTISSA_MASK: u64 = 0xf_ffff_ffff_ffff;

/// The implicit leading one of a normal mantissa, made explicit as bit 52.
pub const IMPLICIT_BIT: u64 = 1 << 52;

/// The exponent bias of the binary64 format.
pub const EXPONENT_BIAS: i32 = 1023;

/// Sign of a double, kept separate from the magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// The sign bit is clear.
    #[default]
    Positive,
    /// The sign bit is set. Applies to negative zero as well.
    Negative,
}

impl Sign {
    /// The sign of a double, read from its sign bit. Distinguishes `-0.0`
    /// from `0.0` and reports the sign of NaN payloads as stored.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// The conventional factor +1/−1 of this sign.
    #[must_use]
    pub const fn factor(self) -> i32 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    #[inline]
    const fn bit(self) -> u64 {
        match self {
            Sign::Positive => 0,
            Sign::Negative => 1 << 63,
        }
    }
}

impl From<i32> for Sign {
    /// Any negative number maps to [`Sign::Negative`], everything else to
    /// [`Sign::Positive`].
    fn from(value: i32) -> Self {
        if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

/// The decomposition of a double produced by [`split`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoubleParts {
    /// Sign read from bit 63.
    pub sign: Sign,
    /// The low 52 fraction bits, with bit 52 forced on iff the value is a
    /// plain normal number. For zero, subnormals, infinity and NaN these are
    /// the raw stored bits with no implicit one.
    pub mantissa: u64,
    /// The unbiased exponent, always `biased − 1023`. Zero therefore reports
    /// −1023, matching the build-side encoding of zero; infinity and NaN
    /// report 1024.
    pub exponent: i32,
    /// True iff the source was a plain normal number, i.e. neither zero nor
    /// subnormal nor infinity nor NaN. Callers distinguish normal values
    /// through this flag, not by inspecting mantissa bit 52.
    pub is_normal: bool,
}

/// Compose a double from its parts without validating them.
///
/// The bit pattern is
/// `sign(63) | ((exponent + 1023) mod 2048)(62..52) | (mantissa mod 2^52)(51..0)`;
/// out-of-range inputs are masked, not rejected. Use [`build`] for the
/// checked surface. Zero must be encoded as mantissa 0 with exponent −1023.
///
/// ```
/// use exact64::binary64::{build_raw, Sign, IMPLICIT_BIT};
///
/// assert_eq!(build_raw(Sign::Positive, IMPLICIT_BIT, 1), 2.0);
/// ```
#[must_use]
pub fn build_raw(sign: Sign, mantissa: u64, exponent: i32) -> f64 {
    let biased = (exponent + EXPONENT_BIAS) as u64 & 0x7ff;
    f64::from_bits(sign.bit() | (biased << 52) | (mantissa & MANTISSA_MASK))
}

/// Compose a double from its parts, validating the triple first.
///
/// The exponent must lie in `[-1023, 1024]`. For an exponent strictly inside
/// that range the result is a normal number and mantissa bit 52 (the
/// implicit one) must be set; for the boundary exponents −1023 and 1024,
/// which encode zero/subnormals and infinity/NaN, it must be clear. All
/// checks run before any composition, so an error never produces a value.
pub fn build(sign: Sign, mantissa: u64, exponent: i32) -> Result<f64, Error> {
    if !(-1023..=1024).contains(&exponent) {
        return Err(Error::ExponentOutOfRange(exponent));
    }
    let implicit_set = mantissa >> 52 != 0;
    let normal = exponent != -1023 && exponent != 1024;
    if implicit_set != normal {
        return Err(Error::MantissaBit52 {
            exponent,
            set: implicit_set,
        });
    }
    Ok(build_raw(sign, mantissa, exponent))
}

/// Decompose a double into sign, mantissa, unbiased exponent and a
/// normality flag.
///
/// Inverse of [`build`] for every valid triple. Zero splits into
/// `(Positive, 0, -1023, false)`; subnormals, infinity and NaN also report
/// `is_normal == false` and keep their raw fraction bits without an
/// implicit one.
///
/// ```
/// use exact64::binary64::{split, Sign};
///
/// let parts = split(2.0);
/// assert_eq!(parts.sign, Sign::Positive);
/// assert_eq!(parts.mantissa, 1 << 52);
/// assert_eq!(parts.exponent, 1);
/// assert!(parts.is_normal);
/// ```
#[must_use]
pub fn split(value: f64) -> DoubleParts {
    let bits = value.to_bits();
    let biased = (bits >> 52) as u32 & 0x7ff;
    // biased exponents 0 and 2047 are the exceptional encodings; subtracting
    // one and comparing unsigned folds both boundaries into a single check
    let is_normal = biased.wrapping_sub(1) < 2046;

    DoubleParts {
        sign: if bits >> 63 != 0 {
            Sign::Negative
        } else {
            Sign::Positive
        },
        mantissa: (bits & MANTISSA_MASK) | (u64::from(is_normal) << 52),
        exponent: biased as i32 - EXPONENT_BIAS,
        is_normal,
    }
}

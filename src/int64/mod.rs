//! 64-bit integer value types with an unsigned and a signed interpretation.
//!
//! [`UInt64`] and [`Int64`] wrap the same 8-byte bit pattern and share the
//! entire operation implementation; the interpretation only changes how
//! comparison, absolute value and default string rendering read those bits
//! (unsigned vs two's-complement). The bit pattern alone is the source of
//! truth, so converting between the two types is free.
//!
//! Every mutating operation replaces the receiver's bit pattern in place and
//! returns `&mut Self`, so operations chain:
//!
//! ```
//! use exact64::UInt64;
//!
//! let mut x = UInt64::from(40);
//! x.add(1).add("1").shl(1);
//! assert_eq!(x.to_bits(), 84);
//! ```
//!
//! Binary operations accept any operand that converts into the receiver's
//! type: native integers, a double (truncated), a string (parsed per
//! [`crate::radix`], with sign handling following the receiver's
//! interpretation) or either value type. Operands are resolved before the
//! receiver is touched, so a panicking conversion never leaves a value
//! half-written.

use std::cmp::Ordering;
use std::fmt;

use crate::carry::{adc64, sbb64};
use crate::error::Error;
use crate::radix;
use crate::shifts;

#[cfg(test)]
mod tests;

/// A 64-bit value under the unsigned interpretation.
///
/// Comparisons, [`abs`](UInt64::abs) and [`Display`](fmt::Display)
/// rendering treat the bit pattern as an unsigned integer; the signed
/// readings remain available through [`ilt`](UInt64::ilt),
/// [`igt`](UInt64::igt), [`signed_compare`](UInt64::signed_compare) and
/// [`to_signed_string_radix`](UInt64::to_signed_string_radix).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UInt64(u64);

/// A 64-bit value under the signed (two's-complement) interpretation.
///
/// Shares the full operation set of [`UInt64`] on the identical bit
/// pattern; it differs in construction from halves (the high half is given
/// as `i32`), in accepting a leading sign when parsing strings, in ordering
/// and in rendering negative values with a `-` prefix by default.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Int64(u64);

impl UInt64 {
    /// The value 0.
    #[must_use]
    pub const fn new() -> Self {
        UInt64(0)
    }

    /// Wrap a bit pattern directly, without any coercion.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        UInt64(bits)
    }

    /// The raw bit pattern.
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Build a value from its 32-bit halves: `hi` lands in bits 32..64,
    /// `lo` in bits 0..32.
    #[must_use]
    pub const fn from_halves(hi: u32, lo: u32) -> Self {
        UInt64((hi as u64) << 32 | lo as u64)
    }

    /// Whether bit 63 is set.
    #[must_use]
    pub const fn sign(self) -> bool {
        self.0 >> 63 != 0
    }

    /// Set or clear bit 63, leaving all other bits unchanged.
    pub fn set_sign(&mut self, sign: bool) {
        if sign {
            self.0 |= 1 << 63;
        } else {
            self.0 &= !(1 << 63);
        }
    }

    /// The high 32-bit half (bits 32..64).
    #[must_use]
    pub const fn hi32(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Replace the high 32-bit half, leaving the low half unchanged.
    pub fn set_hi32(&mut self, half: u32) {
        self.0 = self.0 & 0xffff_ffff | (half as u64) << 32;
    }

    /// The low 32-bit half (bits 0..32).
    #[must_use]
    pub const fn lo32(self) -> u32 {
        self.0 as u32
    }

    /// Replace the low 32-bit half, leaving the high half unchanged.
    pub fn set_lo32(&mut self, half: u32) {
        self.0 = self.0 & !0xffff_ffff | half as u64;
    }

    /// Two's-complement negation.
    pub fn neg(&mut self) -> &mut Self {
        self.0 = self.0.wrapping_neg();
        self
    }

    /// Bitwise complement.
    pub fn not(&mut self) -> &mut Self {
        self.0 = !self.0;
        self
    }

    /// Absolute value under the two's-complement reading: negates iff
    /// bit 63 is set. Note that the pattern of `i64::MIN` is its own
    /// absolute value.
    pub fn abs(&mut self) -> &mut Self {
        if self.sign() {
            self.0 = self.0.wrapping_neg();
        }
        self
    }

    /// Count of leading zero bits; 64 for the value 0.
    #[must_use]
    pub const fn clz(self) -> u32 {
        crate::bits::clz64(self.0)
    }

    /// Count of trailing zero bits; 64 for the value 0.
    #[must_use]
    pub const fn ctz(self) -> u32 {
        crate::bits::ctz64(self.0)
    }

    /// Whether the value is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Wrapping addition of `rhs`.
    pub fn add<R: Into<Self>>(&mut self, rhs: R) -> &mut Self {
        self.0 = self.0.wrapping_add(rhs.into().0);
        self
    }

    /// Wrapping subtraction of `rhs`.
    pub fn sub<R: Into<Self>>(&mut self, rhs: R) -> &mut Self {
        self.0 = self.0.wrapping_sub(rhs.into().0);
        self
    }

    /// Reversed wrapping subtraction: the receiver becomes `rhs - self`.
    pub fn rsub<R: Into<Self>>(&mut self, rhs: R) -> &mut Self {
        self.0 = rhs.into().0.wrapping_sub(self.0);
        self
    }

    /// Bitwise and with `rhs`.
    pub fn bit_and<R: Into<Self>>(&mut self, rhs: R) -> &mut Self {
        self.0 &= rhs.into().0;
        self
    }

    /// Bitwise or with `rhs`.
    pub fn bit_or<R: Into<Self>>(&mut self, rhs: R) -> &mut Self {
        self.0 |= rhs.into().0;
        self
    }

    /// Bitwise exclusive or with `rhs`.
    pub fn bit_xor<R: Into<Self>>(&mut self, rhs: R) -> &mut Self {
        self.0 ^= rhs.into().0;
        self
    }

    /// Carry-propagating addition: adds `rhs` and the incoming carry bit,
    /// stores the wrapping sum and returns the outgoing carry. Chaining the
    /// flag across values computes exact sums beyond 64 bits; this is the
    /// only operation that does so.
    pub fn add2<R: Into<Self>>(&mut self, rhs: R, carry: bool) -> bool {
        let (sum, carry_out) = adc64(self.0, rhs.into().0, carry);
        self.0 = sum;
        carry_out
    }

    /// Borrow-propagating subtraction: subtracts `rhs` and the incoming
    /// borrow bit, stores the wrapping difference and returns the outgoing
    /// borrow.
    pub fn sub2<R: Into<Self>>(&mut self, rhs: R, borrow: bool) -> bool {
        let (diff, borrow_out) = sbb64(self.0, rhs.into().0, borrow);
        self.0 = diff;
        borrow_out
    }

    /// Whether the bit patterns are equal. Interpretation-independent.
    pub fn eq<R: Into<Self>>(self, rhs: R) -> bool {
        self.0 == rhs.into().0
    }

    /// Unsigned less-than.
    pub fn lt<R: Into<Self>>(self, rhs: R) -> bool {
        self.0 < rhs.into().0
    }

    /// Unsigned greater-than.
    pub fn gt<R: Into<Self>>(self, rhs: R) -> bool {
        self.0 > rhs.into().0
    }

    /// Signed (two's-complement) less-than.
    pub fn ilt<R: Into<Self>>(self, rhs: R) -> bool {
        (self.0 as i64) < rhs.into().0 as i64
    }

    /// Signed (two's-complement) greater-than.
    pub fn igt<R: Into<Self>>(self, rhs: R) -> bool {
        self.0 as i64 > rhs.into().0 as i64
    }

    /// Three-way unsigned comparison.
    #[must_use]
    pub fn compare(lhs: Self, rhs: Self) -> Ordering {
        lhs.0.cmp(&rhs.0)
    }

    /// Three-way signed comparison of the same bit patterns.
    #[must_use]
    pub fn signed_compare(lhs: Self, rhs: Self) -> Ordering {
        (lhs.0 as i64).cmp(&(rhs.0 as i64))
    }

    /// Logical left shift by `n mod 64`.
    pub fn shl(&mut self, n: u32) -> &mut Self {
        self.0 = shifts::shl64(self.0, n);
        self
    }

    /// Logical right shift by `n mod 64`.
    pub fn shr(&mut self, n: u32) -> &mut Self {
        self.0 = shifts::shr64(self.0, n);
        self
    }

    /// Arithmetic right shift by `n mod 64`, sign-extending from bit 63
    /// regardless of the unsigned interpretation.
    pub fn sar(&mut self, n: u32) -> &mut Self {
        self.0 = shifts::sar64(self.0, n);
        self
    }

    /// Rotate left by `n mod 64`.
    pub fn rol(&mut self, n: u32) -> &mut Self {
        self.0 = shifts::rol64(self.0, n);
        self
    }

    /// Rotate right by `n mod 64`.
    pub fn ror(&mut self, n: u32) -> &mut Self {
        self.0 = shifts::ror64(self.0, n);
        self
    }

    /// Render the unsigned magnitude in the given radix (2 to 36), using
    /// digits `0-9a-z`.
    pub fn to_string_radix(self, radix: u32) -> Result<String, Error> {
        radix::format(self.0, radix)
    }

    /// Render under the signed reading: when bit 63 is set, a `-` prefix
    /// followed by the two's-complement magnitude, otherwise identical to
    /// [`to_string_radix`](UInt64::to_string_radix).
    pub fn to_signed_string_radix(self, radix: u32) -> Result<String, Error> {
        if self.sign() {
            Ok(format!("-{}", radix::format(self.0.wrapping_neg(), radix)?))
        } else {
            radix::format(self.0, radix)
        }
    }
}

impl Int64 {
    /// The value 0.
    #[must_use]
    pub const fn new() -> Self {
        Int64(0)
    }

    /// Wrap a bit pattern directly, without any coercion.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Int64(bits)
    }

    /// The raw bit pattern.
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Build a value from its 32-bit halves. The signed high half is placed
    /// verbatim in bits 32..64, so a negative `hi` yields a negative value.
    #[must_use]
    pub const fn from_halves(hi: i32, lo: u32) -> Self {
        Int64((hi as u32 as u64) << 32 | lo as u64)
    }

    /// Whether bit 63 is set, i.e. the value is negative.
    #[must_use]
    pub const fn sign(self) -> bool {
        self.0 >> 63 != 0
    }

    /// Set or clear bit 63, leaving all other bits unchanged.
    pub fn set_sign(&mut self, sign: bool) {
        if sign {
            self.0 |= 1 << 63;
        } else {
            self.0 &= !(1 << 63);
        }
    }

    /// The high 32-bit half (bits 32..64).
    #[must_use]
    pub const fn hi32(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Replace the high 32-bit half.
    pub fn set_hi32(&mut self, half: u32) {
        self.0 = self.0 & 0xffff_ffff | (half as u64) << 32;
    }

    /// The low 32-bit half (bits 0..32).
    #[must_use]
    pub const fn lo32(self) -> u32 {
        self.0 as u32
    }

    /// Replace the low 32-bit half.
    pub fn set_lo32(&mut self, half: u32) {
        self.0 = self.0 & !0xffff_ffff | half as u64;
    }

    /// Two's-complement negation.
    pub fn neg(&mut self) -> &mut Self {
        self.0 = self.0.wrapping_neg();
        self
    }

    /// Bitwise complement.
    pub fn not(&mut self) -> &mut Self {
        self.0 = !self.0;
        self
    }

    /// Absolute value: negates iff negative. The pattern of `i64::MIN` is
    /// its own absolute value.
    pub fn abs(&mut self) -> &mut Self {
        if self.sign() {
            self.0 = self.0.wrapping_neg();
        }
        self
    }

    /// Count of leading zero bits; 64 for the value 0.
    #[must_use]
    pub const fn clz(self) -> u32 {
        crate::bits::clz64(self.0)
    }

    /// Count of trailing zero bits; 64 for the value 0.
    #[must_use]
    pub const fn ctz(self) -> u32 {
        crate::bits::ctz64(self.0)
    }

    /// Whether the value is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Wrapping addition of `rhs`.
    pub fn add<R: Into<Self>>(&mut self, rhs: R) -> &mut Self {
        self.0 = self.0.wrapping_add(rhs.into().0);
        self
    }

    /// Wrapping subtraction of `rhs`.
    pub fn sub<R: Into<Self>>(&mut self, rhs: R) -> &mut Self {
        self.0 = self.0.wrapping_sub(rhs.into().0);
        self
    }

    /// Reversed wrapping subtraction: the receiver becomes `rhs - self`.
    pub fn rsub<R: Into<Self>>(&mut self, rhs: R) -> &mut Self {
        self.0 = rhs.into().0.wrapping_sub(self.0);
        self
    }

    /// Bitwise and with `rhs`.
    pub fn bit_and<R: Into<Self>>(&mut self, rhs: R) -> &mut Self {
        self.0 &= rhs.into().0;
        self
    }

    /// Bitwise or with `rhs`.
    pub fn bit_or<R: Into<Self>>(&mut self, rhs: R) -> &mut Self {
        self.0 |= rhs.into().0;
        self
    }

    /// Bitwise exclusive or with `rhs`.
    pub fn bit_xor<R: Into<Self>>(&mut self, rhs: R) -> &mut Self {
        self.0 ^= rhs.into().0;
        self
    }

    /// Carry-propagating addition, see [`UInt64::add2`]. The carry is the
    /// unsigned carry of the bit patterns, which is what multi-limb signed
    /// arithmetic chains as well.
    pub fn add2<R: Into<Self>>(&mut self, rhs: R, carry: bool) -> bool {
        let (sum, carry_out) = adc64(self.0, rhs.into().0, carry);
        self.0 = sum;
        carry_out
    }

    /// Borrow-propagating subtraction, see [`UInt64::sub2`].
    pub fn sub2<R: Into<Self>>(&mut self, rhs: R, borrow: bool) -> bool {
        let (diff, borrow_out) = sbb64(self.0, rhs.into().0, borrow);
        self.0 = diff;
        borrow_out
    }

    /// Whether the bit patterns are equal. Interpretation-independent.
    pub fn eq<R: Into<Self>>(self, rhs: R) -> bool {
        self.0 == rhs.into().0
    }

    /// Unsigned less-than of the bit patterns.
    pub fn lt<R: Into<Self>>(self, rhs: R) -> bool {
        self.0 < rhs.into().0
    }

    /// Unsigned greater-than of the bit patterns.
    pub fn gt<R: Into<Self>>(self, rhs: R) -> bool {
        self.0 > rhs.into().0
    }

    /// Signed less-than.
    pub fn ilt<R: Into<Self>>(self, rhs: R) -> bool {
        (self.0 as i64) < rhs.into().0 as i64
    }

    /// Signed greater-than.
    pub fn igt<R: Into<Self>>(self, rhs: R) -> bool {
        self.0 as i64 > rhs.into().0 as i64
    }

    /// Three-way unsigned comparison of the bit patterns.
    #[must_use]
    pub fn compare(lhs: Self, rhs: Self) -> Ordering {
        lhs.0.cmp(&rhs.0)
    }

    /// Three-way signed comparison.
    #[must_use]
    pub fn signed_compare(lhs: Self, rhs: Self) -> Ordering {
        (lhs.0 as i64).cmp(&(rhs.0 as i64))
    }

    /// Logical left shift by `n mod 64`.
    pub fn shl(&mut self, n: u32) -> &mut Self {
        self.0 = shifts::shl64(self.0, n);
        self
    }

    /// Logical right shift by `n mod 64`.
    pub fn shr(&mut self, n: u32) -> &mut Self {
        self.0 = shifts::shr64(self.0, n);
        self
    }

    /// Arithmetic right shift by `n mod 64`.
    pub fn sar(&mut self, n: u32) -> &mut Self {
        self.0 = shifts::sar64(self.0, n);
        self
    }

    /// Rotate left by `n mod 64`.
    pub fn rol(&mut self, n: u32) -> &mut Self {
        self.0 = shifts::rol64(self.0, n);
        self
    }

    /// Rotate right by `n mod 64`.
    pub fn ror(&mut self, n: u32) -> &mut Self {
        self.0 = shifts::ror64(self.0, n);
        self
    }

    /// Render the unsigned magnitude of the bit pattern in the given radix.
    pub fn to_string_radix(self, radix: u32) -> Result<String, Error> {
        radix::format(self.0, radix)
    }

    /// Render under the signed reading: negative values get a `-` prefix
    /// and their two's-complement magnitude.
    pub fn to_signed_string_radix(self, radix: u32) -> Result<String, Error> {
        if self.sign() {
            Ok(format!("-{}", radix::format(self.0.wrapping_neg(), radix)?))
        } else {
            radix::format(self.0, radix)
        }
    }
}

// operand coercions: native numbers, strings and the sibling type all
// convert into either wrapper, which is what lets every binary operation
// take `impl Into<Self>`

impl From<u64> for UInt64 {
    fn from(value: u64) -> Self {
        UInt64(value)
    }
}

impl From<i64> for UInt64 {
    fn from(value: i64) -> Self {
        UInt64(value as u64)
    }
}

impl From<u32> for UInt64 {
    fn from(value: u32) -> Self {
        UInt64(u64::from(value))
    }
}

impl From<i32> for UInt64 {
    fn from(value: i32) -> Self {
        UInt64(value as i64 as u64)
    }
}

impl From<f64> for UInt64 {
    /// Truncates toward zero; values outside the unsigned 64-bit range
    /// saturate (negative inputs become 0) and NaN becomes 0.
    fn from(value: f64) -> Self {
        UInt64(value as u64)
    }
}

impl From<&str> for UInt64 {
    /// Parses per [`radix::parse_u64`]: leading `0x` selects hex, otherwise
    /// decimal, no sign accepted, unparseable input yields 0.
    fn from(value: &str) -> Self {
        UInt64(radix::parse_u64(value).0)
    }
}

impl From<Int64> for UInt64 {
    fn from(value: Int64) -> Self {
        UInt64(value.0)
    }
}

impl From<u64> for Int64 {
    fn from(value: u64) -> Self {
        Int64(value)
    }
}

impl From<i64> for Int64 {
    fn from(value: i64) -> Self {
        Int64(value as u64)
    }
}

impl From<u32> for Int64 {
    fn from(value: u32) -> Self {
        Int64(u64::from(value))
    }
}

impl From<i32> for Int64 {
    fn from(value: i32) -> Self {
        Int64(value as i64 as u64)
    }
}

impl From<f64> for Int64 {
    /// Truncates toward zero under the signed reading; out-of-range values
    /// saturate to `i64::MIN`/`i64::MAX` and NaN becomes 0.
    fn from(value: f64) -> Self {
        Int64(value as i64 as u64)
    }
}

impl From<&str> for Int64 {
    /// Parses per [`radix::parse_i64`]: one optional leading `+`/`-`, then
    /// hex or decimal digits; unparseable input yields 0.
    fn from(value: &str) -> Self {
        Int64(radix::parse_i64(value).0)
    }
}

impl From<UInt64> for Int64 {
    fn from(value: UInt64) -> Self {
        Int64(value.0)
    }
}

impl PartialOrd for Int64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Int64 {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0 as i64).cmp(&(other.0 as i64))
    }
}

impl fmt::Display for UInt64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&(self.0 as i64), f)
    }
}

impl fmt::Debug for UInt64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<UInt64 {:08x} {:08x}>", self.hi32(), self.lo32())
    }
}

impl fmt::Debug for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Int64 {:08x} {:08x}>", self.hi32(), self.lo32())
    }
}

// Non-mutating bitwise operator layer over the owned values. `Add`, `Sub`,
// `Neg` and `Not` are not implemented: their trait methods share names with
// the in-place mutators, and method resolution prefers the by-value trait
// method over the `&mut self` one, which would turn `x.add(y)` into a
// discarded copy. Non-mutating arithmetic is a copy followed by a mutator
// call.

macro_rules! impl_value_ops {
    ($name:ident) => {
        impl<R: Into<$name>> std::ops::BitAnd<R> for $name {
            type Output = $name;
            fn bitand(self, rhs: R) -> $name {
                $name(self.0 & rhs.into().0)
            }
        }

        impl<R: Into<$name>> std::ops::BitOr<R> for $name {
            type Output = $name;
            fn bitor(self, rhs: R) -> $name {
                $name(self.0 | rhs.into().0)
            }
        }

        impl<R: Into<$name>> std::ops::BitXor<R> for $name {
            type Output = $name;
            fn bitxor(self, rhs: R) -> $name {
                $name(self.0 ^ rhs.into().0)
            }
        }
    };
}

impl_value_ops!(UInt64);
impl_value_ops!(Int64);

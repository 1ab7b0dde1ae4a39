//! Carry-propagating addition and borrow-propagating subtraction for 64-bit
//! words.
//!
//! The returned flag is the exact mathematical carry/borrow, so chaining the
//! flag from one limb into the next computes exact multi-word sums and
//! differences of any width:
//!
//! ```
//! use exact64::carry::adc64;
//!
//! // 128-bit addition from two 64-bit limbs
//! let (lo, carry) = adc64(u64::MAX, 1, false);
//! let (hi, overflow) = adc64(3, 0, carry);
//! assert_eq!((hi, lo), (4, 0));
//! assert!(!overflow);
//! ```

/// Add two 64-bit words and an incoming carry bit. Returns the wrapping sum
/// and the outgoing carry, which is true iff the unsigned sum
/// `a + b + carry_in` does not fit in 64 bits.
#[must_use]
#[inline(always)]
pub const fn adc64(a: u64, b: u64, carry_in: bool) -> (u64, bool) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(carry_in as u64);
    // at most one of the two partial additions can overflow
    (sum, c1 | c2)
}

/// Subtract a 64-bit word and an incoming borrow bit from `a`. Returns the
/// wrapping difference and the outgoing borrow, which is true iff
/// `a < b + borrow_in` as unsigned integers.
#[must_use]
#[inline(always)]
pub const fn sbb64(a: u64, b: u64, borrow_in: bool) -> (u64, bool) {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(borrow_in as u64);
    (diff, b1 | b2)
}

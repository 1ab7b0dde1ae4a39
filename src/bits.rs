//! Bit counting primitives for 32- and 64-bit words.
//!
//! All functions in this module are total: they are defined for every input,
//! including zero, where the leading/trailing zero counts return the full word
//! width by convention. Callers build on that contract and do not special-case
//! zero themselves.
//!
//! The standard integer methods used here lower to single instructions
//! (`lzcnt`/`tzcnt`/`popcnt` on x86_64, `clz`/`rbit`+`clz`/`cnt` on ARM64)
//! where the target supports them, with a portable software fallback
//! otherwise.

/// Count leading zero bits of a 32-bit word. Returns 32 for `x == 0`.
#[must_use]
#[inline(always)]
pub const fn clz32(x: u32) -> u32 {
    x.leading_zeros()
}

/// Count leading zero bits of a 64-bit word. Returns 64 for `x == 0`.
#[must_use]
#[inline(always)]
pub const fn clz64(x: u64) -> u32 {
    x.leading_zeros()
}

/// Count trailing zero bits of a 32-bit word. Returns 32 for `x == 0`.
#[must_use]
#[inline(always)]
pub const fn ctz32(x: u32) -> u32 {
    x.trailing_zeros()
}

/// Count trailing zero bits of a 64-bit word. Returns 64 for `x == 0`.
#[must_use]
#[inline(always)]
pub const fn ctz64(x: u64) -> u32 {
    x.trailing_zeros()
}

/// Count the set bits of a 32-bit word.
#[must_use]
#[inline(always)]
pub const fn popcnt32(x: u32) -> u32 {
    x.count_ones()
}

/// Count the set bits of a 64-bit word.
#[must_use]
#[inline(always)]
pub const fn popcnt64(x: u64) -> u32 {
    x.count_ones()
}

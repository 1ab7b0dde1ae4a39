//! Shift and rotate primitives with hardware shift semantics.
//!
//! Every function masks its shift amount to `width - 1` before use, so any
//! amount is accepted and amounts of the word width or more wrap around, the
//! way an x86 shift instruction masks its count register. This makes the
//! functions total; callers never have to range-check an amount. ARM would
//! happily shift further and produce zero, which is exactly the inconsistency
//! the masking removes.

/// Logical left shift of a 32-bit word by `n mod 32`.
#[must_use]
#[inline(always)]
pub const fn shl32(x: u32, n: u32) -> u32 {
    x << (n & 31)
}

/// Logical left shift of a 64-bit word by `n mod 64`.
#[must_use]
#[inline(always)]
pub const fn shl64(x: u64, n: u32) -> u64 {
    x << (n & 63)
}

/// Logical right shift of a 32-bit word by `n mod 32`.
#[must_use]
#[inline(always)]
pub const fn shr32(x: u32, n: u32) -> u32 {
    x >> (n & 31)
}

/// Logical right shift of a 64-bit word by `n mod 64`.
#[must_use]
#[inline(always)]
pub const fn shr64(x: u64, n: u32) -> u64 {
    x >> (n & 63)
}

/// Arithmetic (sign-extending) right shift of a 32-bit word by `n mod 32`.
/// The word is shifted under its two's-complement interpretation regardless
/// of how the caller otherwise reads it.
#[must_use]
#[inline(always)]
pub const fn sar32(x: u32, n: u32) -> u32 {
    ((x as i32) >> (n & 31)) as u32
}

/// Arithmetic (sign-extending) right shift of a 64-bit word by `n mod 64`.
#[must_use]
#[inline(always)]
pub const fn sar64(x: u64, n: u32) -> u64 {
    ((x as i64) >> (n & 63)) as u64
}

/// Rotate a 32-bit word left by `n mod 32`. Well-defined for every amount,
/// including zero.
#[must_use]
#[inline(always)]
pub const fn rol32(x: u32, n: u32) -> u32 {
    x.rotate_left(n & 31)
}

/// Rotate a 64-bit word left by `n mod 64`.
#[must_use]
#[inline(always)]
pub const fn rol64(x: u64, n: u32) -> u64 {
    x.rotate_left(n & 63)
}

/// Rotate a 32-bit word right by `n mod 32`.
#[must_use]
#[inline(always)]
pub const fn ror32(x: u32, n: u32) -> u32 {
    x.rotate_right(n & 31)
}

/// Rotate a 64-bit word right by `n mod 64`.
#[must_use]
#[inline(always)]
pub const fn ror64(x: u64, n: u32) -> u64 {
    x.rotate_right(n & 63)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_amount_masking() {
        assert_eq!(shl64(0xdead_beef, 64), 0xdead_beef);
        assert_eq!(shl64(0xdead_beef, 0), 0xdead_beef);
        assert_eq!(shl64(1, 65), 2);
        assert_eq!(shr64(8, 64), 8);
        assert_eq!(shr64(8, 67), 1);
        assert_eq!(shl32(1, 32), 1);
        assert_eq!(shr32(0x8000_0000, 33), 0x4000_0000);
    }

    #[test]
    fn test_arithmetic_shift() {
        assert_eq!(sar64(u64::MAX, 17), u64::MAX);
        assert_eq!(sar64(0x8000_0000_0000_0000, 63), u64::MAX);
        assert_eq!(sar64(0x4000_0000_0000_0000, 62), 1);
        assert_eq!(sar64(1, 1), 0);
        assert_eq!(sar32(0x8000_0000, 4), 0xf800_0000);
        assert_eq!(sar32(0x7fff_ffff, 4), 0x07ff_ffff);
        // amount masked like the logical shifts
        assert_eq!(sar64(u64::MAX, 64), u64::MAX);
        assert_eq!(sar32(0x8000_0000, 32), 0x8000_0000);
    }

    #[test]
    fn test_rotate_round_trip() {
        let patterns = [0u64, 1, 0x8000_0000_0000_0000, 0xdead_beef_cafe_babe, u64::MAX];
        for &x in &patterns {
            for n in 0..=130 {
                assert_eq!(ror64(rol64(x, n), n), x, "x={x:#x} n={n}");
            }
        }
        for n in 0..=70 {
            assert_eq!(ror32(rol32(0xcafe_babe, n), n), 0xcafe_babe);
        }
    }

    #[test]
    fn test_rotate_carries_bits_around() {
        assert_eq!(rol64(0x8000_0000_0000_0000, 1), 1);
        assert_eq!(ror64(1, 1), 0x8000_0000_0000_0000);
        assert_eq!(rol32(0x8000_0001, 4), 0x0000_0018);
        assert_eq!(rol64(0xdead_beef, 0), 0xdead_beef);
        assert_eq!(rol64(0xdead_beef, 64), 0xdead_beef);
    }
}

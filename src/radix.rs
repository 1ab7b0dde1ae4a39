//! String conversion for 64-bit values in any radix from 2 to 36.
//!
//! Parsing is deliberately lenient: it consumes what it can and stops at the
//! first byte that is not a digit of the detected radix. An unparseable span
//! yields the value 0. Callers that need strict validation compare the
//! returned consumed-byte count against the input length instead of relying
//! on an error path.
//!
//! Formatting writes digits right to left into a caller-supplied scratch
//! buffer, so a single 65-byte buffer covers the worst case (64 digits in
//! radix 2) for every radix without a second copy.

use crate::error::Error;

/// Minimum length of a formatting destination buffer. 64 digits suffice for
/// any value in radix 2; the extra byte keeps the layout of the original
/// NUL-terminated scratch buffer so callers can size arrays once.
pub const MIN_BUFFER_LEN: usize = 65;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[inline]
fn hex_digit(b: u8) -> Option<u64> {
    match b {
        b'0'..=b'9' => Some(u64::from(b - b'0')),
        b'a'..=b'f' => Some(u64::from(b - b'a' + 10)),
        b'A'..=b'F' => Some(u64::from(b - b'A' + 10)),
        _ => None,
    }
}

#[inline]
fn dec_digit(b: u8) -> Option<u64> {
    match b {
        b'0'..=b'9' => Some(u64::from(b - b'0')),
        _ => None,
    }
}

/// Parse an unsigned 64-bit value from the start of `s`.
///
/// A leading `0x` or `0X` followed by at least one hex digit selects
/// case-insensitive hexadecimal; anything else is parsed as decimal. Parsing
/// stops at the first byte that is not a digit of the selected radix and
/// returns the value accumulated so far together with the number of bytes
/// consumed (including the hex prefix). No whitespace is skipped. If no
/// digits are consumed the result is `(0, 0)`.
///
/// Values beyond 64 bits wrap: hex digits shift out the top bits, decimal
/// accumulation is performed modulo 2^64.
///
/// ```
/// use exact64::radix::parse_u64;
///
/// assert_eq!(parse_u64("0xff"), (255, 4));
/// assert_eq!(parse_u64("255 apples"), (255, 3));
/// assert_eq!(parse_u64("apples"), (0, 0));
/// ```
#[must_use]
pub fn parse_u64(s: &str) -> (u64, usize) {
    let bytes = s.as_bytes();
    let mut value: u64 = 0;

    if bytes.len() > 2
        && bytes[0] == b'0'
        && (bytes[1] == b'x' || bytes[1] == b'X')
        && hex_digit(bytes[2]).is_some()
    {
        let mut pos = 2;
        while pos < bytes.len() {
            match hex_digit(bytes[pos]) {
                Some(digit) => value = (value << 4) | digit,
                None => break,
            }
            pos += 1;
        }
        return (value, pos);
    }

    let mut pos = 0;
    while pos < bytes.len() {
        match dec_digit(bytes[pos]) {
            Some(digit) => value = value.wrapping_mul(10).wrapping_add(digit),
            None => break,
        }
        pos += 1;
    }
    (value, pos)
}

/// Parse a signed 64-bit value from the start of `s`, returning its
/// two's-complement bit pattern.
///
/// Accepts at most one leading `+` or `-` before the digits; a `-` negates
/// the unsigned parse of the remainder (two's-complement negation of the
/// magnitude, not digit-wise negation). Everything else behaves like
/// [`parse_u64`]. A sign that is not followed by any digit consumes nothing
/// and yields `(0, 0)`.
///
/// ```
/// use exact64::radix::parse_i64;
///
/// assert_eq!(parse_i64("-1"), (u64::MAX, 2));
/// assert_eq!(parse_i64("+0x10"), (16, 5));
/// assert_eq!(parse_i64("-"), (0, 0));
/// ```
#[must_use]
pub fn parse_i64(s: &str) -> (u64, usize) {
    let (negative, rest, sign_len) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..], 1),
        Some(b'+') => (false, &s[1..], 1),
        _ => (false, s, 0),
    };

    let (magnitude, consumed) = parse_u64(rest);
    if consumed == 0 {
        return (0, 0);
    }
    let value = if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };
    (value, consumed + sign_len)
}

/// Format `value` in the given radix into `buf`, returning the formatted
/// digits as a string slice borrowed from the tail of the buffer.
///
/// Digits are drawn from `0-9a-z` and written right to left, so the buffer
/// must hold at least [`MIN_BUFFER_LEN`] bytes regardless of the radix.
/// Returns [`Error::RadixOutOfRange`] for a radix outside `2..=36` and
/// [`Error::BufferTooSmall`] for an undersized buffer; nothing is written in
/// either case.
///
/// Power-of-two radices extract digits with masked shifts instead of
/// division. Both paths produce identical output.
pub fn format_into(mut value: u64, radix: u32, buf: &mut [u8]) -> Result<&str, Error> {
    if !(2..=36).contains(&radix) {
        return Err(Error::RadixOutOfRange(radix));
    }
    if buf.len() < MIN_BUFFER_LEN {
        return Err(Error::BufferTooSmall(buf.len()));
    }

    let mut pos = buf.len();
    if radix.is_power_of_two() {
        let shift = radix.trailing_zeros();
        let mask = u64::from(radix - 1);
        loop {
            pos -= 1;
            buf[pos] = DIGITS[(value & mask) as usize];
            value >>= shift;
            if value == 0 {
                break;
            }
        }
    } else {
        let radix = u64::from(radix);
        loop {
            pos -= 1;
            buf[pos] = DIGITS[(value % radix) as usize];
            value /= radix;
            if value == 0 {
                break;
            }
        }
    }

    // the digit table is pure ASCII
    Ok(std::str::from_utf8(&buf[pos..]).unwrap())
}

/// Format `value` in the given radix into a freshly allocated string.
///
/// Convenience wrapper around [`format_into`] with a stack scratch buffer;
/// the radix must lie in `2..=36`.
pub fn format(value: u64, radix: u32) -> Result<String, Error> {
    let mut scratch = [0u8; MIN_BUFFER_LEN];
    format_into(value, radix, &mut scratch).map(str::to_owned)
}

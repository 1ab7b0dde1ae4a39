use super::{Int64, UInt64};
use std::cmp::Ordering;

#[test]
fn test_construction() {
    assert!(UInt64::new().is_zero());
    assert!(Int64::default().is_zero());
    assert_eq!(UInt64::from_bits(42).to_bits(), 42);
    assert_eq!(UInt64::from(42u64).to_bits(), 42);
    assert_eq!(UInt64::from_halves(0xdead_beef, 0xcafe_babe).to_bits(), 0xdead_beef_cafe_babe);
    assert_eq!(UInt64::from(Int64::from(-1i64)).to_bits(), u64::MAX);
    assert_eq!(Int64::from(UInt64::from_bits(7)).to_bits(), 7);
}

#[test]
fn test_signed_halves_constructor() {
    // the signed high half lands in the top bits verbatim
    assert_eq!(Int64::from_halves(-1, 0).to_bits(), 0xffff_ffff_0000_0000);
    assert_eq!(Int64::from_halves(-1, u32::MAX).to_bits(), u64::MAX);
    assert_eq!(Int64::from_halves(1, 0).to_bits(), 1 << 32);
    assert_eq!(UInt64::from_halves(u32::MAX, 0).to_bits(), 0xffff_ffff_0000_0000);
}

#[test]
fn test_number_coercion() {
    assert_eq!(UInt64::from(3.9f64).to_bits(), 3);
    assert_eq!(UInt64::from(-1.0f64).to_bits(), 0);
    assert_eq!(Int64::from(-1.0f64).to_bits(), u64::MAX);
    assert_eq!(Int64::from(-3.9f64).to_bits(), (-3i64) as u64);
    assert_eq!(UInt64::from(-1i32).to_bits(), u64::MAX);
    assert_eq!(Int64::from(i64::MIN).to_bits(), 1 << 63);
}

#[test]
fn test_string_coercion() {
    assert_eq!(UInt64::from("255").to_bits(), 255);
    assert_eq!(UInt64::from("0xff").to_bits(), 255);
    // no sign handling under the unsigned interpretation
    assert_eq!(UInt64::from("-1").to_bits(), 0);
    assert_eq!(Int64::from("-1").to_bits(), u64::MAX);
    assert_eq!(Int64::from("+0x10").to_bits(), 16);
    // unparseable operands silently coerce to zero
    assert_eq!(UInt64::from("garbage").to_bits(), 0);
}

#[test]
fn test_accessors() {
    let mut x = UInt64::from_halves(0x1234_5678, 0x9abc_def0);
    assert_eq!(x.hi32(), 0x1234_5678);
    assert_eq!(x.lo32(), 0x9abc_def0);
    assert!(!x.sign());

    x.set_sign(true);
    assert_eq!(x.hi32(), 0x9234_5678);
    x.set_sign(false);
    assert_eq!(x.hi32(), 0x1234_5678);

    // replacing one half must leave every bit of the other half intact
    x.set_lo32(0);
    assert_eq!(x.to_bits(), 0x1234_5678_0000_0000);
    x.set_hi32(0xffff_ffff);
    assert_eq!(x.to_bits(), 0xffff_ffff_0000_0000);
    x.set_lo32(0x0000_00ff);
    assert_eq!(x.to_bits(), 0xffff_ffff_0000_00ff);
}

#[test]
fn test_unary_ops() {
    let mut x = UInt64::from(1u64);
    x.neg();
    assert_eq!(x.to_bits(), u64::MAX);
    x.not();
    assert_eq!(x.to_bits(), 0);

    let mut x = Int64::from(-5i64);
    x.abs();
    assert_eq!(x.to_bits(), 5);
    x.abs();
    assert_eq!(x.to_bits(), 5);

    // i64::MIN is its own absolute value
    let mut x = Int64::from(i64::MIN);
    x.abs();
    assert_eq!(x.to_bits(), 1 << 63);

    assert_eq!(UInt64::from(1u64).clz(), 63);
    assert_eq!(UInt64::from(1u64).ctz(), 0);
    assert_eq!(UInt64::new().clz(), 64);
    assert_eq!(UInt64::new().ctz(), 64);
    assert!(UInt64::new().is_zero());
    assert!(!UInt64::from(1u64).is_zero());
}

#[test]
fn test_binary_ops_chain() {
    let mut x = UInt64::from(40u64);
    x.add(1).add("1").shl(1);
    assert_eq!(x.to_bits(), 84);

    x.sub(4u64);
    assert_eq!(x.to_bits(), 80);

    x.rsub(100u64);
    assert_eq!(x.to_bits(), 20);

    x.bit_or(3u64).bit_and(0x7u64).bit_xor(0x1u64);
    assert_eq!(x.to_bits(), 0x6);
}

#[test]
fn test_wrapping_semantics() {
    let mut x = UInt64::from(u64::MAX);
    x.add(1u64);
    assert!(x.is_zero());

    let mut x = UInt64::new();
    x.sub(1u64);
    assert_eq!(x.to_bits(), u64::MAX);

    let mut x = Int64::from(i64::MAX);
    x.add(1u64);
    assert_eq!(x.to_bits(), (i64::MIN) as u64);
}

#[test]
fn test_carry_chaining() {
    // 128-bit addition: (2^64 + 5) + (2^64 - 1) done limb by limb
    let mut lo = UInt64::from(5u64);
    let mut hi = UInt64::from(1u64);
    let carry = lo.add2(u64::MAX, false);
    assert!(carry);
    let carry = hi.add2(1u64, carry);
    assert!(!carry);
    assert_eq!((hi.to_bits(), lo.to_bits()), (3, 4));

    // and back down again
    let mut lo = UInt64::from(4u64);
    let mut hi = UInt64::from(3u64);
    let borrow = lo.sub2(u64::MAX, false);
    assert!(borrow);
    let borrow = hi.sub2(1u64, borrow);
    assert!(!borrow);
    assert_eq!((hi.to_bits(), lo.to_bits()), (1, 5));
}

#[test]
fn test_comparisons() {
    let minus_one = UInt64::from_bits(u64::MAX);
    let one = UInt64::from(1u64);

    assert!(minus_one.gt(one));
    assert!(!minus_one.lt(one));
    assert!(minus_one.ilt(one));
    assert!(!minus_one.igt(one));
    assert!(one.eq(1u64));
    assert!(one.eq("1"));
    assert!(!one.eq(2u64));

    assert_eq!(UInt64::compare(minus_one, one), Ordering::Greater);
    assert_eq!(UInt64::signed_compare(minus_one, one), Ordering::Less);
    // both comparators agree while bit 63 is clear
    let a = UInt64::from(17u64);
    let b = UInt64::from(42u64);
    assert_eq!(UInt64::compare(a, b), UInt64::signed_compare(a, b));
    assert_eq!(UInt64::compare(b, a), UInt64::signed_compare(b, a));
    assert_eq!(UInt64::compare(a, a), Ordering::Equal);

    // Ord follows each type's own interpretation
    assert!(UInt64::from_bits(u64::MAX) > UInt64::from(1u64));
    assert!(Int64::from_bits(u64::MAX) < Int64::from(1u64));
}

#[test]
fn test_shifts() {
    let mut x = UInt64::from(1u64);
    x.shl(63);
    assert_eq!(x.to_bits(), 1 << 63);
    x.sar(63);
    assert_eq!(x.to_bits(), u64::MAX);
    x.shr(32);
    assert_eq!(x.to_bits(), 0xffff_ffff);

    // amounts are masked mod 64
    let mut x = UInt64::from(0xdead_beefu64);
    x.shl(64);
    assert_eq!(x.to_bits(), 0xdead_beef);
    x.rol(68);
    assert_eq!(x.to_bits(), 0xdead_beef0);
    x.ror(4);
    assert_eq!(x.to_bits(), 0xdead_beef);
}

#[test]
fn test_unsigned_rendering() {
    let x = UInt64::from(255u64);
    assert_eq!(x.to_string_radix(16).unwrap(), "ff");
    assert_eq!(x.to_string_radix(10).unwrap(), "255");
    assert_eq!(x.to_string_radix(2).unwrap(), "11111111");
    assert!(x.to_string_radix(37).is_err());
    assert!(x.to_string_radix(1).is_err());
    assert_eq!(x.to_string(), "255");
}

#[test]
fn test_signed_rendering() {
    let minus_one = Int64::from(-1i64);
    assert_eq!(minus_one.to_signed_string_radix(10).unwrap(), "-1");
    assert_eq!(minus_one.to_signed_string_radix(16).unwrap(), "-1");
    // the unsigned rendering of the same pattern is the full magnitude
    assert_eq!(minus_one.to_string_radix(10).unwrap(), "18446744073709551615");
    assert_eq!(minus_one.to_string(), "-1");

    let minus_256 = Int64::from(-256i64);
    assert_eq!(minus_256.to_signed_string_radix(16).unwrap(), "-100");

    // i64::MIN magnitude survives the negation because the pattern wraps
    let min = Int64::from(i64::MIN);
    assert_eq!(min.to_signed_string_radix(10).unwrap(), "-9223372036854775808");

    // positive values render identically either way
    let x = Int64::from(42i64);
    assert_eq!(x.to_signed_string_radix(10).unwrap(), "42");
    assert_eq!(x.to_string_radix(10).unwrap(), "42");

    // signed rendering also exists on the unsigned wrapper
    assert_eq!(UInt64::from_bits(u64::MAX).to_signed_string_radix(10).unwrap(), "-1");
}

#[test]
fn test_debug_format() {
    let x = UInt64::from_halves(0xdead_beef, 0x0000_00ff);
    assert_eq!(format!("{x:?}"), "<UInt64 deadbeef 000000ff>");
    let x = Int64::from(-1i64);
    assert_eq!(format!("{x:?}"), "<Int64 ffffffff ffffffff>");
}

#[test]
fn test_bitwise_operators() {
    let a = UInt64::from(0b1100u64);
    let b = UInt64::from(0b1010u64);
    assert_eq!((a & b).to_bits(), 0b1000);
    assert_eq!((a | b).to_bits(), 0b1110);
    assert_eq!((a ^ b).to_bits(), 0b0110);
    // operands coerce like the mutating operations
    assert_eq!((a & "0xff").to_bits(), 0b1100);
    let c = Int64::from(-1i64);
    assert_eq!((c ^ 0u64).to_bits(), u64::MAX);
}

#[test]
fn test_operand_resolution_is_eager() {
    // a coercion happens before the receiver is touched, so the receiver
    // keeps its value through an operand that parses to zero
    let mut x = UInt64::from(7u64);
    x.add("nope");
    assert_eq!(x.to_bits(), 7);
}

#[test]
fn test_parse_round_trip_via_coercion() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let bits = rng.gen::<u64>();
        let x = UInt64::from_bits(bits);
        let decimal = x.to_string_radix(10).unwrap();
        assert_eq!(UInt64::from(decimal.as_str()).to_bits(), bits);
        let signed = Int64::from_bits(bits);
        let rendered = signed.to_signed_string_radix(10).unwrap();
        assert_eq!(Int64::from(rendered.as_str()).to_bits(), bits);
    }
}

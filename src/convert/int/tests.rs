use super::*;
use crate::source::SliceSource;

fn run(input: &[u8], width: Option<u32>, specifier: u8) -> (Option<i64>, usize) {
    let mut backing = SliceSource::new(input);
    let mut cur = Cursor::new(&mut backing);
    let r = read_int(&mut cur, width, specifier).map(|r| r.bits);
    (r, cur.read_chars())
}

#[test]
fn plain_decimal() {
    let (bits, read) = run(b"42rest", None, b'd');
    assert_eq!(bits, Some(42));
    assert_eq!(read, 2);
}

#[test]
fn leading_sign() {
    let (bits, _) = run(b"-7", None, b'd');
    assert_eq!(bits, Some(-7));
}

#[test]
fn auto_detect_hex_prefix() {
    let (bits, read) = run(b"0x1A,", None, b'i');
    assert_eq!(bits, Some(0x1a));
    assert_eq!(read, 4);
}

#[test]
fn auto_detect_octal_prefix() {
    let (bits, _) = run(b"017", None, b'i');
    assert_eq!(bits, Some(0o17));
}

#[test]
fn i_on_zero_nine_yields_zero_leaving_nine_unread() {
    // a leading zero with no `x` that follows selects octal, and `9` isn't an octal digit.
    let (bits, read) = run(b"09", None, b'i');
    assert_eq!(bits, Some(0));
    assert_eq!(read, 1);
}

#[test]
fn pointer_requires_0x_prefix() {
    let (bits, _) = run(b"1234", None, b'p');
    assert!(bits.is_none());
}

#[test]
fn pointer_reads_hex_after_0x() {
    let (bits, _) = run(b"0xdead", None, b'p');
    assert_eq!(bits, Some(0xdead));
}

#[test]
fn hex_prefix_without_following_hex_digit_still_consumes_x() {
    // reference behaviour: the `x` is committed to as soon as it's seen, even if no hex
    // digit follows -- it is not pushed back.
    let (bits, read) = run(b"0xg", None, b'i');
    assert_eq!(bits, Some(0));
    assert_eq!(read, 2);
}

#[test]
fn width_limits_digits_consumed() {
    let (bits, read) = run(b"12345", Some(3), b'd');
    assert_eq!(bits, Some(123));
    assert_eq!(read, 3);
}

#[test]
fn no_digits_is_failure() {
    let (bits, read) = run(b"xyz", None, b'd');
    assert!(bits.is_none());
    assert_eq!(read, 0);
}

#[test]
fn unsigned_overflow_saturates_to_u64_max() {
    let (bits, _) = run(b"99999999999999999999", None, b'u');
    assert_eq!(bits, Some(u64::MAX as i64));
}

#[test]
fn signed_overflow_saturates_with_sign() {
    let (bits, _) = run(b"-99999999999999999999", None, b'd');
    assert_eq!(bits, Some(i64::MIN));
}

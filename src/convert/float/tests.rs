use super::*;
use crate::source::SliceSource;

fn run(input: &[u8], width: Option<u32>) -> Option<f64> {
    let mut backing = SliceSource::new(input);
    let mut cur = Cursor::new(&mut backing);
    read_float(&mut cur, width).map(|r| r.value)
}

#[test]
fn plain_integer_float() {
    assert_eq!(run(b"42", None), Some(42.0));
}

#[test]
fn decimal_fraction() {
    assert_eq!(run(b"3.25", None), Some(3.25));
}

#[test]
fn negative_with_exponent() {
    assert_eq!(run(b"-1.5e2", None), Some(-150.0));
}

#[test]
fn bare_dot_is_failure_without_digits() {
    assert!(run(b".", None).is_none());
}

#[test]
fn exponent_without_digits_is_failure() {
    assert!(run(b"1e", None).is_none());
}

#[cfg(feature = "infinite")]
#[test]
fn nan_literal() {
    let v = run(b"nan", None).unwrap();
    assert!(v.is_nan());
}

#[cfg(feature = "infinite")]
#[test]
fn nan_literal_with_payload_suffix() {
    let v = run(b"nan(123)rest", None).unwrap();
    assert!(v.is_nan());
}

#[cfg(feature = "infinite")]
#[test]
fn infinity_literal_long_form() {
    assert_eq!(run(b"infinity", None), Some(f64::INFINITY));
}

#[cfg(feature = "infinite")]
#[test]
fn infinity_literal_short_form_and_negative() {
    assert_eq!(run(b"-inf", None), Some(f64::NEG_INFINITY));
}

#[cfg(feature = "infinite")]
#[test]
fn malformed_inf_prefix_is_failure() {
    assert!(run(b"inx", None).is_none());
}

#[test]
fn hex_float_mantissa_and_binary_exponent() {
    // 0x1.8p1 == 1.5 * 2^1 == 3.0
    assert_eq!(run(b"0x1.8p1", None), Some(3.0));
}

#[test]
fn width_cuts_conversion_short() {
    assert_eq!(run(b"123.45", Some(3)), Some(123.0));
}

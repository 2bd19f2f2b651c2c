use super::*;

#[test]
fn eof_is_negative_only() {
    assert!(is_eof(EOF));
    assert!(is_eof(-2));
    assert!(!is_eof(0));
    assert!(!is_eof(b'a' as i32));
}

#[test]
fn space_matches_c_isspace() {
    for c in [' ', '\t', '\n', '\x0b', '\x0c', '\r'] {
        assert!(is_space(c as i32), "{c:?} should be space");
    }
    assert!(!is_space('a' as i32));
    assert!(!is_space(EOF));
}

#[test]
fn digit_classes() {
    assert!(is_digit('5' as i32));
    assert!(!is_digit('a' as i32));
    assert!(is_alpha('Z' as i32));
    assert!(is_alpha('m' as i32));
    assert!(!is_alpha('5' as i32));
    assert!(is_alnum('5' as i32));
    assert!(is_alnum('m' as i32));
    assert!(!is_alnum('_' as i32));
}

#[test]
fn radix_membership() {
    assert!(is_digit_radix('1' as i32, 2));
    assert!(!is_digit_radix('2' as i32, 2));
    assert!(is_digit_radix('7' as i32, 8));
    assert!(!is_digit_radix('8' as i32, 8));
    assert!(is_digit_radix('f' as i32, 16));
    assert!(is_digit_radix('F' as i32, 16));
    assert!(!is_digit_radix('g' as i32, 16));
}

#[test]
fn digit_values() {
    assert_eq!(digit_value_radix('7' as i32, 10), Some(7));
    assert_eq!(digit_value_radix('a' as i32, 10), None);
    assert_eq!(digit_value_radix('a' as i32, 16), Some(10));
    assert_eq!(digit_value_radix('F' as i32, 16), Some(15));
    assert_eq!(digit_value_radix('9' as i32, 8), None);
    assert_eq!(digit_value_radix('1' as i32, 2), Some(1));
}

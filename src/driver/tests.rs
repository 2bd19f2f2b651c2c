use super::*;
use crate::classify::EOF;
use crate::scan_args;
use crate::source::SliceSource;

fn run(input: &[u8], format: &[u8], args: &mut [ScanArg<'_>]) -> i32 {
    let mut src = SliceSource::new(input);
    iscanf(&mut src, format, args)
}

#[test]
fn matches_literal_then_integer() {
    let mut n = 0i32;
    let got = run(b"count=42", b"count=%d", &mut scan_args![i32 => &mut n]);
    assert_eq!(got, 1);
    assert_eq!(n, 42);
}

#[test]
fn whitespace_in_format_skips_any_amount_of_input_whitespace() {
    let mut a = 0i32;
    let mut b = 0i32;
    let got = run(
        b"1    2",
        b"%d %d",
        &mut scan_args![i32 => &mut a, i32 => &mut b],
    );
    assert_eq!(got, 2);
    assert_eq!((a, b), (1, 2));
}

#[test]
fn mismatched_literal_returns_fields_matched_so_far() {
    let mut n = 0i32;
    let got = run(b"x=5", b"y=%d", &mut scan_args![i32 => &mut n]);
    assert_eq!(got, 0);
}

#[test]
fn eof_before_any_conversion_returns_eof_sentinel() {
    let mut n = 0i32;
    let got = run(b"", b"%d", &mut scan_args![i32 => &mut n]);
    assert_eq!(got, EOF);
}

#[test]
fn suppressed_directive_does_not_consume_an_arg_or_count_as_a_field() {
    let mut n = 0i32;
    let got = run(
        b"skip 9",
        b"%*s %d",
        &mut scan_args![i32 => &mut n],
    );
    assert_eq!(got, 1);
    assert_eq!(n, 9);
}

#[test]
fn percent_percent_matches_one_literal_percent() {
    let mut n = 0i32;
    let got = run(b"50%", b"%d%%", &mut scan_args![i32 => &mut n]);
    assert_eq!(got, 1);
    assert_eq!(n, 50);
}

#[test]
fn string_directive_stops_at_whitespace() {
    let mut buf = [0u8; 16];
    let got = run(b"hello world", b"%s", &mut scan_args![bytes => &mut buf]);
    assert_eq!(got, 1);
    assert_eq!(&buf[..5], b"hello");
    assert_eq!(buf[5], 0);
}

#[test]
fn char_directive_reads_exact_width_including_whitespace() {
    let mut buf = [0u8; 3];
    let got = run(b"a c", b"%3c", &mut scan_args![bytes => &mut buf]);
    assert_eq!(got, 1);
    assert_eq!(&buf, b"a c");
}

#[test]
fn scanset_directive_honors_negation() {
    let mut buf = [0u8; 8];
    let got = run(b"12,34", b"%[^,]", &mut scan_args![bytes => &mut buf]);
    assert_eq!(got, 1);
    assert_eq!(&buf[..2], b"12");
}

#[test]
fn percent_n_reports_characters_consumed_so_far() {
    let mut a = 0i32;
    let mut count = 0i32;
    let got = run(
        b"42xyz",
        b"%d%n",
        &mut scan_args![i32 => &mut a, count => &mut count],
    );
    assert_eq!(got, 1);
    assert_eq!(count, 2);
}

#[test]
fn float_directive_reads_decimal() {
    let mut f = 0f64;
    let got = run(b"3.5", b"%lf", &mut scan_args![f64 => &mut f]);
    assert_eq!(got, 1);
    assert_eq!(f, 3.5);
}

#[test]
fn pointer_nil_literal_stores_null() {
    let mut p: *mut core::ffi::c_void = 1 as *mut core::ffi::c_void;
    let got = run(b"(nil)", b"%p", &mut scan_args![ptr => &mut p]);
    assert_eq!(got, 1);
    assert!(p.is_null());
}

#[test]
fn width_limits_string_read() {
    let mut buf = [0u8; 16];
    let got = run(b"abcdef", b"%3s", &mut scan_args![bytes => &mut buf]);
    assert_eq!(got, 1);
    assert_eq!(&buf[..3], b"abc");
}

#[test]
fn match_failure_mid_scan_stops_further_directives() {
    let mut a = 0i32;
    let mut b = 0i32;
    let got = run(
        b"7 x",
        b"%d %d",
        &mut scan_args![i32 => &mut a, i32 => &mut b],
    );
    assert_eq!(got, 1);
    assert_eq!(a, 7);
}

#[test]
fn back_to_back_widths_split_a_run_of_digits() {
    let mut a = 0i32;
    let mut b = 0i32;
    let got = run(
        b"1234",
        b"%2d%2d",
        &mut scan_args![i32 => &mut a, i32 => &mut b],
    );
    assert_eq!(got, 2);
    assert_eq!((a, b), (12, 34));
}

#[test]
fn adjacent_scansets_split_on_membership_change() {
    let mut first = [0u8; 8];
    let mut second = [0u8; 8];
    let got = run(
        b"abcde",
        b"%[abc]%[de]",
        &mut scan_args![bytes => &mut first, bytes => &mut second],
    );
    assert_eq!(got, 2);
    assert_eq!(&first[..3], b"abc");
    assert_eq!(&second[..2], b"de");
}

#[test]
fn scanset_range_stops_at_first_non_member() {
    let mut buf = [0u8; 8];
    let got = run(b"01239a", b"%[0-9]a", &mut scan_args![bytes => &mut buf]);
    assert_eq!(got, 1);
    assert_eq!(&buf[..5], b"01239");
}

#[cfg(feature = "float")]
#[test]
fn decimal_float_with_positive_exponent() {
    let mut f = 0f32;
    let got = run(b"100.5e+3", b"%f", &mut scan_args![f32 => &mut f]);
    assert_eq!(got, 1);
    assert_eq!(f, 100_500.0);
}

#[cfg(feature = "float")]
#[test]
fn hex_float_directive_matches_f_specifier() {
    let mut f = 0f32;
    let got = run(b"0x0.3p10", b"%f", &mut scan_args![f32 => &mut f]);
    assert_eq!(got, 1);
    assert_eq!(f, 192.0);
}

#[cfg(feature = "float")]
#[test]
fn mixed_int_float_string_directives_all_succeed() {
    let mut d = 0i32;
    let mut f = 0f32;
    let mut s = [0u8; 16];
    let got = run(
        b"25 54.32E-1 thompson",
        b"%d%f%s",
        &mut scan_args![i32 => &mut d, f32 => &mut f, bytes => &mut s],
    );
    assert_eq!(got, 3);
    assert_eq!(d, 25);
    assert!((f - 5.432).abs() < 1e-4, "f = {f}");
    assert_eq!(&s[..8], b"thompson");
}

#[test]
fn char_then_n_then_char_reports_exact_progress() {
    let mut count = 0i32;
    let mut fb = [0u8; 1];
    let mut sb = [0u8; 1];
    let got = run(
        b"ab",
        b"%c%n%c",
        &mut scan_args![bytes => &mut fb, count => &mut count, bytes => &mut sb],
    );
    assert_eq!(got, 2);
    assert_eq!(fb[0], b'a');
    assert_eq!(count, 1);
    assert_eq!(sb[0], b'b');
}

#[test]
fn colon_separated_fields_all_convert() {
    let mut h = 0i32;
    let mut m = 0i32;
    let mut s = 0i32;
    let got = run(
        b"02:50:09",
        b"%d:%d:%d",
        &mut scan_args![i32 => &mut h, i32 => &mut m, i32 => &mut s],
    );
    assert_eq!(got, 3);
    assert_eq!((h, m, s), (2, 50, 9));
}

#[cfg(feature = "float")]
#[test]
fn leading_word_rejects_float_before_any_field_succeeds() {
    let mut f = 0f32;
    let mut a = [0u8; 24];
    let mut b = [0u8; 24];
    let got = run(
        b"lots of luck",
        b"%f%20s of %20s",
        &mut scan_args![f32 => &mut f, bytes => &mut a, bytes => &mut b],
    );
    assert_eq!(got, 0);
}

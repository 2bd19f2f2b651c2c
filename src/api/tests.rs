use super::*;
use crate::scan_args;

#[test]
fn sscanf_stops_at_embedded_nul() {
    let mut n = 0i32;
    let got = sscanf(b"12\x0034", b"%d%d", &mut scan_args![i32 => &mut n]);
    assert_eq!(got, 1);
    assert_eq!(n, 12);
}

#[test]
fn spscanf_advances_pointer_past_consumed_input() {
    let mut rest: &[u8] = b"1 2 3";
    let mut a = 0i32;
    let got = spscanf(&mut rest, b"%d", &mut scan_args![i32 => &mut a]);
    assert_eq!(got, 1);
    assert_eq!(a, 1);
    assert_eq!(rest, b" 2 3");

    let mut b = 0i32;
    let got = spscanf(&mut rest, b" %d", &mut scan_args![i32 => &mut b]);
    assert_eq!(got, 1);
    assert_eq!(b, 2);
    assert_eq!(rest, b" 3");
}

#[test]
fn fctscanf_reads_from_a_caller_supplied_callback() {
    let mut chars = b"99".iter().copied();
    let mut source =
        crate::source::FnSource::new(|| chars.next().map_or(crate::classify::EOF, i32::from));
    let mut n = 0i32;
    let got = fctscanf(&mut source, b"%d", &mut scan_args![i32 => &mut n]);
    assert_eq!(got, 1);
    assert_eq!(n, 99);
}

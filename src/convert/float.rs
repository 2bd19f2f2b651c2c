//! The `%e`/`%f`/`%g`/`%a` conversion path.
//!
//! Handles decimal and hex floats, the optional `nan`/`inf` literals (behind the `infinite`
//! feature), and scanf's classic mantissa/exponent reconstruction: digits accumulate
//! into a [`crate::accum::FloatAccum`] mantissa and a signed exponent, the fractional digit count
//! folds into the exponent as a negative offset, and the result is combined via a single
//! power-of-base multiply or divide at the end.

use crate::accum::{FloatAccum, IntAccum};
use crate::classify::{digit_value_radix, is_alnum};
use crate::source::Cursor;

/// The outcome of a successful float conversion.
pub struct FloatRead {
    pub value: f64,
}

/// Reads one float, honoring `width` (`None` means unbounded).
///
/// Returns `None` on a matching failure (no digits, or a malformed `nan`/`inf` literal under the
/// `infinite` feature).
#[must_use]
pub fn read_float(cur: &mut Cursor<'_>, width: Option<u32>) -> Option<FloatRead> {
    let mut consumed = 0u32;
    let within = |n: u32| width.map_or(true, |w| n < w);

    let mut negative = false;
    if within(consumed) {
        let c = cur.peek();
        if c == i32::from(b'-') {
            negative = true;
            cur.advance();
            consumed += 1;
        } else if c == i32::from(b'+') {
            cur.advance();
            consumed += 1;
        }
    }

    #[cfg(feature = "infinite")]
    if let Some(value) = read_infinite_literal(cur, width, &mut consumed, negative)? {
        return Some(FloatRead { value });
    }

    let mut base = 10u32;
    let mut hex = false;
    let mut digit = false;
    if within(consumed) && cur.peek() == i32::from(b'0') {
        cur.advance();
        consumed += 1;
        digit = true;
        if within(consumed) {
            let n = cur.peek();
            if n == i32::from(b'x') || n == i32::from(b'X') {
                base = 16;
                hex = true;
                cur.advance();
                consumed += 1;
            }
        }
    }

    let mut mantissa = FloatAccum::new();
    let mut dot = false;
    let sub: i64 = if hex { 4 } else { 1 };
    let mut off: i64 = 0;

    loop {
        if !within(consumed) {
            break;
        }
        let c = cur.peek();
        if c == i32::from(b'.') && !dot {
            dot = true;
            cur.advance();
            consumed += 1;
            continue;
        }
        let Some(d) = digit_value_radix(c, base) else {
            break;
        };
        let was_saturated = mantissa.saturated();
        mantissa.push_digit(d, base);
        digit = true;
        if dot && !was_saturated {
            off += sub;
        }
        cur.advance();
        consumed += 1;
    }

    if !digit {
        return None;
    }

    let (exp_marker_lower, exp_marker_upper) = if hex {
        (b'p', b'P')
    } else {
        (b'e', b'E')
    };

    let mut exp: i64 = 0;
    if within(consumed) {
        let c = cur.peek();
        if c == i32::from(exp_marker_lower) || c == i32::from(exp_marker_upper) {
            cur.advance();
            consumed += 1;
            let mut exp_negative = false;
            if within(consumed) {
                let c = cur.peek();
                if c == i32::from(b'-') {
                    exp_negative = true;
                    cur.advance();
                    consumed += 1;
                } else if c == i32::from(b'+') {
                    cur.advance();
                    consumed += 1;
                }
            }
            let mut exp_accum = IntAccum::new();
            while within(consumed) && cur.peek() == i32::from(b'0') {
                exp_accum.mark_digit_seen();
                cur.advance();
                consumed += 1;
            }
            while within(consumed) {
                let Some(d) = digit_value_radix(cur.peek(), 10) else {
                    break;
                };
                exp_accum.push_digit(d, 10);
                cur.advance();
                consumed += 1;
            }
            if !exp_accum.digit_seen() {
                return None;
            }
            exp = if exp_accum.saturated() {
                if exp_negative { i64::MIN } else { i64::MAX }
            } else {
                let raw = exp_accum.value() as i64;
                if raw < 0 {
                    if exp_negative { i64::MIN } else { i64::MAX }
                } else if exp_negative {
                    -raw
                } else {
                    raw
                }
            };
        }
    }

    if dot {
        exp = exp.saturating_sub(off);
    }

    let mut r = mantissa.value();
    if r != 0.0 {
        // The exponent is always applied as a power of 2 for hex floats (the `p` exponent in
        // `%a` notation) and a power of 10 for decimal floats, regardless of `base` (16 vs 10),
        // which only governs how the mantissa's own digits were accumulated.
        let base_f = if hex { 2.0 } else { 10.0 };
        if exp > 0 {
            let max_exp = i64::from(if hex { f64::MAX_EXP } else { f64::MAX_10_EXP });
            if exp > max_exp {
                r = f64::INFINITY;
            } else {
                r *= base_f.powi(exp as i32);
            }
        } else if exp < 0 {
            let min_exp = i64::from(if hex { f64::MIN_EXP } else { f64::MIN_10_EXP });
            if exp < min_exp {
                r = 0.0;
            } else {
                r /= base_f.powi((-exp) as i32);
            }
        }
    }
    if negative {
        r = -r;
    }

    Some(FloatRead { value: r })
}

/// Attempts to read a `nan`/`nan(...)`/`inf`/`infinity` literal. Returns `Ok(Some(value))` on a
/// successful literal, `Ok(None)` if the lookahead doesn't start one at all (so the caller falls
/// through to ordinary digit parsing), and `Err(())` if it started one but the literal was
/// malformed (a genuine matching failure).
#[cfg(feature = "infinite")]
fn read_infinite_literal(
    cur: &mut Cursor<'_>,
    width: Option<u32>,
    consumed: &mut u32,
    negative: bool,
) -> Option<Option<f64>> {
    let within = |n: u32| width.map_or(true, |w| n < w);
    let eq_ci = |c: i32, lower: u8| c == i32::from(lower) || c == i32::from(lower - 0x20);

    if within(*consumed) && eq_ci(cur.peek(), b'n') {
        cur.advance();
        *consumed += 1;
        if !within(*consumed) || !eq_ci(cur.peek(), b'a') {
            return None;
        }
        cur.advance();
        *consumed += 1;
        if !within(*consumed) || !eq_ci(cur.peek(), b'n') {
            return None;
        }
        cur.advance();
        *consumed += 1;
        if within(*consumed) && cur.peek() == i32::from(b'(') {
            loop {
                if !within(*consumed) {
                    break;
                }
                cur.advance();
                *consumed += 1;
                let c = cur.peek();
                if c == i32::from(b')') {
                    cur.advance();
                    *consumed += 1;
                    break;
                } else if c != i32::from(b'_') && !is_alnum(c) {
                    return None;
                }
            }
        }
        let value = if negative { -f64::NAN } else { f64::NAN };
        return Some(Some(value));
    }

    if within(*consumed) && eq_ci(cur.peek(), b'i') {
        cur.advance();
        *consumed += 1;
        if !within(*consumed) || !eq_ci(cur.peek(), b'n') {
            return None;
        }
        cur.advance();
        *consumed += 1;
        if !within(*consumed) || !eq_ci(cur.peek(), b'f') {
            return None;
        }
        cur.advance();
        *consumed += 1;
        if within(*consumed) {
            const REST: &[u8] = b"INITY";
            for &expect in REST {
                if !within(*consumed) || !eq_ci(cur.peek(), expect) {
                    break;
                }
                cur.advance();
                *consumed += 1;
            }
        }
        let value = if negative { f64::NEG_INFINITY } else { f64::INFINITY };
        return Some(Some(value));
    }

    Some(None)
}

#[cfg(test)]
mod tests;

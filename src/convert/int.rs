//! The `%d`/`%u`/`%i`/`%o`/`%x`/`%X`/`%b`/`%p` conversion path.
//!
//! Reads one character at a time off a [`Cursor`], folding digits into an [`IntAccum`] exactly
//! the way scanf's classic `readnum`/`readptr` code path does, including its
//! auto-base-detection for `%i`/`%x`/`%X`/`%p` and its overflow-then-saturate-then-negate
//! combination step.

use crate::accum::IntAccum;
use crate::classify::digit_value_radix;
use crate::source::Cursor;

/// The outcome of a successful integer conversion: a magnitude already folded with its sign and
/// overflow behaviour, ready to hand to [`crate::arg::ScanArg::store_int`] or
/// [`crate::arg::ScanArg::store_ptr`] (both just reinterpret these bits at the destination's
/// width).
pub struct IntRead {
    pub bits: i64,
}

/// Reads one integer per the rules of `specifier` (one of `d`, `u`, `i`, `o`, `x`, `X`, `b`, `p`),
/// honoring `width` (`None` means unbounded).
///
/// Returns `None` if no digit was read at all, which the driver treats as a matching failure (or,
/// if the cursor is at EOF at that point, an input failure: the same ambiguity a classic scanf
/// implementation resolves by checking `GOT_EOF()` only once, at the single point of failure).
#[must_use]
pub fn read_int(cur: &mut Cursor<'_>, width: Option<u32>, specifier: u8) -> Option<IntRead> {
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

    let unsigned = matches!(specifier, b'u' | b'o' | b'x' | b'X' | b'b');
    let mut base: u32 = match specifier {
        b'o' => 8,
        b'x' | b'X' | b'p' => 16,
        #[cfg(feature = "binary")]
        b'b' => 2,
        _ => 10,
    };

    let mut accum = IntAccum::new();

    if matches!(specifier, b'i' | b'x' | b'X' | b'p') {
        let mut found_hex_prefix = specifier != b'p';
        if within(consumed) && cur.peek() == i32::from(b'0') {
            accum.mark_digit_seen();
            cur.advance();
            consumed += 1;
            if within(consumed) {
                let n = cur.peek();
                if n == i32::from(b'x') || n == i32::from(b'X') {
                    base = 16;
                    found_hex_prefix = true;
                    cur.advance();
                    consumed += 1;
                } else if specifier == b'i' {
                    base = 8;
                }
            }
        }
        if !found_hex_prefix {
            return None;
        }
    }

    while within(consumed) && cur.peek() == i32::from(b'0') {
        accum.mark_digit_seen();
        cur.advance();
        consumed += 1;
    }
    while within(consumed) {
        let Some(d) = digit_value_radix(cur.peek(), base) else {
            break;
        };
        accum.push_digit(d, base);
        cur.advance();
        consumed += 1;
    }

    if !accum.digit_seen() {
        return None;
    }

    Some(IntRead {
        bits: combine_sign(accum.value(), accum.saturated(), negative, unsigned),
    })
}

/// Applies overflow clamping and sign to an accumulated magnitude, mirroring the reference
/// algorithm's `if (unsign) { ... } else { ... }` combination step exactly.
fn combine_sign(value: u64, saturated: bool, negative: bool, unsigned: bool) -> i64 {
    if unsigned {
        if saturated {
            u64::MAX as i64
        } else if negative {
            (value as i64).wrapping_neg()
        } else {
            value as i64
        }
    } else {
        let raw = value as i64;
        if saturated || raw < 0 {
            if negative { i64::MIN } else { i64::MAX }
        } else if negative {
            -raw
        } else {
            raw
        }
    }
}

#[cfg(test)]
mod tests;

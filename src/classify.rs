//! Character classification and digit conversion, used by every conversion path in
//! [`crate::driver`].
//!
//! This module assumes ASCII ordering for its arithmetic shortcuts; this crate has no
//! internal-ctype/ASCII split since it never supports locales or non-ASCII code unit orderings.
//! Every function here is a pure, total function of a single byte widened to [`i32`] (the same
//! widening the driver uses for its lookahead, so that the EOF sentinel propagates without
//! special-casing at every call site).

/// Sentinel returned by a [`crate::source::Source`] to mean "no more input".
pub const EOF: i32 = -1;

/// Returns `true` if `c` is the EOF sentinel.
#[must_use]
#[inline]
pub const fn is_eof(c: i32) -> bool {
    c < 0
}

/// Returns `true` if `c` is an ASCII whitespace character: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[must_use]
#[inline]
pub const fn is_space(c: i32) -> bool {
    matches!(c, 0x20 | 0x09..=0x0d)
}

/// Returns `true` if `c` is an ASCII decimal digit.
#[must_use]
#[inline]
pub const fn is_digit(c: i32) -> bool {
    matches!(c, 0x30..=0x39)
}

/// Returns `true` if `c` is an ASCII letter.
#[must_use]
#[inline]
pub const fn is_alpha(c: i32) -> bool {
    matches!(c, 0x41..=0x5a | 0x61..=0x7a)
}

/// Returns `true` if `c` is an ASCII letter or digit.
#[must_use]
#[inline]
pub const fn is_alnum(c: i32) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Returns `true` if `c` is a valid digit in the given `radix` (2, 8, 10, or 16).
#[must_use]
#[inline]
pub const fn is_digit_radix(c: i32, radix: u32) -> bool {
    match radix {
        2 => matches!(c, 0x30..=0x31),
        8 => matches!(c, 0x30..=0x37),
        16 => matches!(c, 0x30..=0x39 | 0x41..=0x46 | 0x61..=0x66),
        _ => is_digit(c),
    }
}

/// Converts a digit character in the given `radix` to its value, or `None` if it doesn't belong
/// to that radix.
#[must_use]
#[inline]
pub const fn digit_value_radix(c: i32, radix: u32) -> Option<u32> {
    if !is_digit_radix(c, radix) {
        return None;
    }
    Some(match c {
        0x30..=0x39 => (c - 0x30) as u32,
        0x41..=0x46 => (c - 0x41) as u32 + 10,
        0x61..=0x66 => (c - 0x61) as u32 + 10,
        _ => unreachable!(),
    })
}

#[cfg(test)]
mod tests;

//! Overflow-safe numeric accumulators shared by the width parser, the integer conversion path,
//! the float mantissa, and the float exponent.
//!
//! Both accumulators keep consuming digits once they saturate: callers are expected to keep
//! reading (and counting) characters even after [`IntAccum::saturated`] / [`FloatAccum::saturated`]
//! turns true, so that width bounds and `%n` accounting stay correct. Neither type ever panics on
//! overflow; each replaces the wrapping-arithmetic-based overflow idiom classic `scanf`
//! implementations use with an explicit `saturated: bool` flag instead.

/// Accumulates an unsigned magnitude one digit at a time, latching `saturated` the first time a
/// multiply would wrap. Used for field widths, integer conversions (pre-sign), and float
/// exponents (pre-sign).
#[derive(Debug, Clone, Copy, Default)]
pub struct IntAccum {
    value: u64,
    prev: u64,
    digit_seen: bool,
    saturated: bool,
}

impl IntAccum {
    /// Creates a fresh, zeroed accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: 0,
            prev: 0,
            digit_seen: false,
            saturated: false,
        }
    }

    /// Folds in one digit's value at the given radix.
    ///
    /// Marks [`Self::digit_seen`] unconditionally (even once saturated), since whether *any*
    /// digit was observed is tracked independently of whether the magnitude overflowed.
    pub fn push_digit(&mut self, digit: u32, radix: u32) {
        self.digit_seen = true;
        if self.saturated {
            return;
        }
        let mul = self.value.wrapping_mul(u64::from(radix));
        if mul < self.prev {
            self.saturated = true;
            return;
        }
        self.prev = mul;
        self.value = mul + u64::from(digit);
    }

    /// Marks that a digit was seen without folding in a value (used for the `%i`/`%x`/`%p`
    /// "saw a leading `0`" and "saw a `0x` prefix" bookkeeping, which count toward "saw a digit"
    /// without themselves being folded into the magnitude).
    pub fn mark_digit_seen(&mut self) {
        self.digit_seen = true;
    }

    /// Whether any digit has been folded in or marked seen.
    #[must_use]
    pub const fn digit_seen(&self) -> bool {
        self.digit_seen
    }

    /// Whether the magnitude has saturated (overflowed its 64-bit accumulator).
    #[must_use]
    pub const fn saturated(&self) -> bool {
        self.saturated
    }

    /// The accumulated magnitude. Meaningless once [`Self::saturated`] is `true`; callers must
    /// check that first and substitute the appropriate extreme value themselves.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }
}

/// Accumulates a floating-point mantissa one digit at a time, in the given base (10 for decimal
/// floats, 16 for hex floats). Latches `saturated` once the accumulator reaches its representable
/// ceiling (`r * base == r && r > 0`, mirroring scanf's classic detection idiom).
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatAccum {
    r: f64,
    digit_seen: bool,
    saturated: bool,
}

impl FloatAccum {
    /// Creates a fresh, zeroed accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            r: 0.0,
            digit_seen: false,
            saturated: false,
        }
    }

    /// Folds in one mantissa digit at the given base.
    pub fn push_digit(&mut self, digit: u32, base: u32) {
        self.digit_seen = true;
        if self.saturated {
            return;
        }
        let next = self.r * f64::from(base);
        if next > 0.0 && next == self.r {
            self.saturated = true;
            return;
        }
        self.r = next + f64::from(digit);
    }

    /// Whether any mantissa digit was observed (a leading `0` counts, per the "bare `0x` counts
    /// as having a digit because the preceding `0` does" rule).
    #[must_use]
    pub const fn digit_seen(&self) -> bool {
        self.digit_seen
    }

    /// Whether the mantissa has saturated.
    #[must_use]
    pub const fn saturated(&self) -> bool {
        self.saturated
    }

    /// The accumulated mantissa value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.r
    }
}

#[cfg(test)]
mod tests;

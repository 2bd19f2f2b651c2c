//! The Rust shape of the `scanf` argument list.
//!
//! C's `va_list` has no Rust equivalent, so callers build an explicit, ordered sequence of typed
//! destinations ([`ScanArg`]) and pass it as a slice: a small closed enum wrapping each
//! destination, with conversions enforced at construction, rather than an open-ended trait
//! object.

use core::ffi::c_void;

use crate::error::ScanError;

/// One destination for a single non-suppressed, non-literal conversion directive.
///
/// The variant chosen at the call site *is* the destination's width and signedness (there is no
/// separate cast step the way C reinterprets a `void *` through the length modifier). The driver
/// still parses the length modifier to advance past it correctly in the format string, but the
/// modifier itself carries no separate runtime check against the variant's width: unlike C, where
/// the modifier is the only way the callee learns how many bytes `dst` points at, the variant
/// chosen here already says that directly. What the driver does check is *category*: an `%s`
/// directive paired with an integer destination, for instance, still fails via [`ScanError`].
#[derive(Debug)]
#[non_exhaustive]
pub enum ScanArg<'a> {
    /// `%hhd` / `%hhi` destination.
    I8(&'a mut i8),
    /// `%hd` / `%hi` destination.
    I16(&'a mut i16),
    /// `%d` / `%i` destination (no length modifier).
    I32(&'a mut i32),
    /// `%lld` / `%lli` destination (or `%ld`/`%li` if `long-long` is disabled).
    I64(&'a mut i64),
    /// `%zd` / `%td` destination.
    Isize(&'a mut isize),
    /// `%hhu` / `%hhx` / `%hho` / `%hhb` destination.
    U8(&'a mut u8),
    /// `%hu` / `%hx` / `%ho` / `%hb` destination.
    U16(&'a mut u16),
    /// `%u` / `%x` / `%o` / `%b` destination (no length modifier).
    U32(&'a mut u32),
    /// `%llu` / `%llx` / `%llo` / `%llb` destination.
    U64(&'a mut u64),
    /// `%zu` / `%zx` destination.
    Usize(&'a mut usize),
    /// `%f` / `%e` / `%g` / `%a` destination (no length modifier).
    F32(&'a mut f32),
    /// `%lf` / `%le` / `%lg` / `%la` destination (also used for `%Lf`, since this crate has no
    /// wider-than-`f64` float type).
    F64(&'a mut f64),
    /// `%p` destination.
    Ptr(&'a mut *mut c_void),
    /// `%c` / `%s` / `%[...]` destination. The slice is the full available buffer; `%s` and
    /// `%[` NUL-terminate within it (so the usable capacity is `len - 1`), while `%c` fills it
    /// with exactly `width` (default 1) raw characters and never NUL-terminates.
    Bytes(&'a mut [u8]),
    /// `%n` destination. Always signed regardless of length modifier, per the specification.
    Count(&'a mut i32),
}

impl ScanArg<'_> {
    /// Stores an accumulated integer magnitude, reinterpreting `bits` as `unsigned` or
    /// two's-complement signed according to the variant.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if this variant's width doesn't match what the caller expected from
    /// the length modifier (the driver treats this as a matching failure, not a panic).
    pub(crate) fn store_int(&mut self, bits: i64) -> Result<(), ScanError> {
        match self {
            Self::I8(d) => **d = bits as i8,
            Self::I16(d) => **d = bits as i16,
            Self::I32(d) => **d = bits as i32,
            Self::I64(d) => **d = bits,
            Self::Isize(d) => **d = bits as isize,
            Self::U8(d) => **d = bits as u8,
            Self::U16(d) => **d = bits as u16,
            Self::U32(d) => **d = bits as u32,
            Self::U64(d) => **d = bits as u64,
            Self::Usize(d) => **d = bits as usize,
            _ => return Err(ScanError),
        }
        Ok(())
    }

    /// Stores a `%n` character count. Always signed, regardless of any length modifier on `%n`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if this is not a [`ScanArg::Count`] destination.
    pub(crate) fn store_count(&mut self, value: i64) -> Result<(), ScanError> {
        match self {
            Self::Count(d) => {
                **d = value as i32;
                Ok(())
            }
            _ => Err(ScanError),
        }
    }

    /// Stores a pointer value (from `%p`, either a parsed hex address or the null pointer from
    /// `(nil)`).
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if this is not a [`ScanArg::Ptr`] destination.
    pub(crate) fn store_ptr(&mut self, value: usize) -> Result<(), ScanError> {
        match self {
            Self::Ptr(d) => {
                **d = value as *mut c_void;
                Ok(())
            }
            _ => Err(ScanError),
        }
    }

    /// Stores a reconstructed floating-point value, narrowing to `f32` if the destination calls
    /// for it.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if this is not a float destination.
    pub(crate) fn store_float(&mut self, value: f64) -> Result<(), ScanError> {
        match self {
            Self::F32(d) => **d = value as f32,
            Self::F64(d) => **d = value,
            _ => return Err(ScanError),
        }
        Ok(())
    }

    /// Copies `src` into the byte destination, returning the number of bytes actually room for
    /// (the destination's capacity, for `%s`/`%[` minus the NUL terminator they'll write).
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if this is not a [`ScanArg::Bytes`] destination.
    pub(crate) fn bytes_mut(&mut self) -> Result<&mut &mut [u8], ScanError> {
        match self {
            Self::Bytes(d) => Ok(d),
            _ => Err(ScanError),
        }
    }
}

/// An ordered, single-pass cursor over a caller-supplied [`ScanArg`] slice.
///
/// Each non-suppressed, non-literal conversion directive pulls exactly one destination. Running
/// out is a caller contract violation (there must be one destination per non-suppressed,
/// non-literal specifier), surfaced the same way a bad format directive is: the driver treats it
/// as an immediate matching failure rather than panicking or reading out of bounds.
pub struct ArgCursor<'a, 'b> {
    args: &'a mut [ScanArg<'b>],
    pos: usize,
}

impl<'a, 'b> ArgCursor<'a, 'b> {
    /// Wraps `args` for left-to-right consumption.
    #[must_use]
    pub fn new(args: &'a mut [ScanArg<'b>]) -> Self {
        Self { args, pos: 0 }
    }

    /// Pulls the next destination, or `None` if the cursor is exhausted.
    pub fn next(&mut self) -> Option<&mut ScanArg<'b>> {
        let slot = self.args.get_mut(self.pos)?;
        self.pos += 1;
        Some(slot)
    }
}

/// Builds a `&mut [ScanArg]` from ergonomic `kind => binding` pairs, avoiding the need to spell
/// out `ScanArg::I32(&mut x)` by hand at every call site.
///
/// ```
/// use iscanf::{scan_args, sscanf};
///
/// let mut year = 0i32;
/// let mut buf = [0u8; 16];
/// let n = sscanf(b"2024 ok", b"%d %s", &mut scan_args![i32 => &mut year, bytes => &mut buf]);
/// assert_eq!(n, 2);
/// assert_eq!(year, 2024);
/// ```
#[macro_export]
macro_rules! scan_args {
    ($($kind:tt => $dest:expr),* $(,)?) => {
        [ $( $crate::scan_args!(@one $kind => $dest) ),* ]
    };
    (@one i8 => $dest:expr) => { $crate::arg::ScanArg::I8($dest) };
    (@one i16 => $dest:expr) => { $crate::arg::ScanArg::I16($dest) };
    (@one i32 => $dest:expr) => { $crate::arg::ScanArg::I32($dest) };
    (@one i64 => $dest:expr) => { $crate::arg::ScanArg::I64($dest) };
    (@one isize => $dest:expr) => { $crate::arg::ScanArg::Isize($dest) };
    (@one u8 => $dest:expr) => { $crate::arg::ScanArg::U8($dest) };
    (@one u16 => $dest:expr) => { $crate::arg::ScanArg::U16($dest) };
    (@one u32 => $dest:expr) => { $crate::arg::ScanArg::U32($dest) };
    (@one u64 => $dest:expr) => { $crate::arg::ScanArg::U64($dest) };
    (@one usize => $dest:expr) => { $crate::arg::ScanArg::Usize($dest) };
    (@one f32 => $dest:expr) => { $crate::arg::ScanArg::F32($dest) };
    (@one f64 => $dest:expr) => { $crate::arg::ScanArg::F64($dest) };
    (@one ptr => $dest:expr) => { $crate::arg::ScanArg::Ptr($dest) };
    (@one bytes => $dest:expr) => { $crate::arg::ScanArg::Bytes($dest) };
    (@one count => $dest:expr) => { $crate::arg::ScanArg::Count($dest) };
}

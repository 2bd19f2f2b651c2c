//! The `%!` extension hook.
//!
//! A directive of the form `%!name` (an exclamation mark right after any width, before the
//! specifier character) hands the rest of the format string and the live input cursor to a
//! caller-supplied [`ScanExt`] implementation, the way a `SCANF_EXTENSIONS`-style hook hands off
//! to a caller-supplied `getch`/`data` pair. Feature-gated behind `extensions`; the public entry
//! points that accept an extension hook exist only when
//! that feature is enabled (see [`crate::iscanf_ext`]), but the trait itself has no feature gate
//! so it can be implemented and tested regardless.

use crate::arg::ScanArg;
use crate::source::Cursor;

/// What a [`ScanExt`] implementation reports after attempting to consume one `%!` directive.
pub struct ExtOutcome {
    /// How many bytes of the format string (starting right after `%!`) this directive consumed.
    /// The byte at that offset is expected to be the conversion's terminator, consumed by the
    /// caller the same way a `]` terminates a `%[` scanset.
    pub consumed_spec: usize,
    /// Whether the directive matched the input. `false` is a matching failure, exactly like an
    /// unrecognized specifier letter.
    pub matched: bool,
}

/// A caller-supplied handler for `%!` directives.
pub trait ScanExt {
    /// Attempts to consume one `%!` directive.
    ///
    /// `spec` is the format text immediately following `%!`. `width` is the field width parsed
    /// before the `!`, if any. `dest` is the next destination from the caller's argument list,
    /// already pulled the same way a built-in conversion pulls one (`None` if the directive was
    /// suppressed with `%!*...`, in which case the implementation should still consume the right
    /// amount of input but not store anything). The implementation reads characters from `cur` the
    /// same way the built-in conversions do (via [`Cursor::peek`]/[`Cursor::advance`]) and must
    /// not read past `width` characters if one was given.
    fn scan(
        &mut self,
        cur: &mut Cursor<'_>,
        width: Option<u32>,
        spec: &[u8],
        dest: Option<&mut ScanArg<'_>>,
    ) -> ExtOutcome;
}

//! The public entry points: thin wrappers over [`crate::driver::iscanf`] that each wire up a
//! [`crate::source::Source`] appropriate to their input, and that decide for themselves whether
//! that source supports pushback (mirroring C's own scanf wrapper family, which differ from each
//! other only in which `getch`/`ungetch` pair they hand to the shared driver).

use crate::arg::ScanArg;
use crate::driver;
#[cfg(feature = "extensions")]
use crate::ext::ScanExt;
use crate::source::{SliceCursorSource, SliceSource};

/// Scans `input` against `format`, storing matched fields into `args` in order.
///
/// `input` is treated as NUL-terminated, the way a C string literal would be: a `\0` byte acts as
/// an early end of input even if more bytes follow it in the slice. There is no pushback; once
/// this call returns, `input` has not been modified and nothing is "put back" anywhere, since
/// there is nowhere to put it.
#[must_use]
pub fn sscanf(input: &[u8], format: &[u8], args: &mut [ScanArg<'_>]) -> i32 {
    let mut source = SliceSource::new(input);
    driver::iscanf(&mut source, format, args)
}

/// Scans from `*s` against `format`, advancing `*s` to just past the last byte actually consumed
/// (including the final lookahead read, backed out the way a one-byte `ungetc` would).
///
/// This is the pointer-advancing sibling of [`sscanf`]: repeated calls with the same `s` resume
/// exactly where the previous call left off, which `sscanf` cannot do since it always starts from
/// the beginning of its slice.
#[must_use]
pub fn spscanf<'s>(s: &mut &'s [u8], format: &[u8], args: &mut [ScanArg<'_>]) -> i32 {
    let mut source = SliceCursorSource::new(*s);
    let result = driver::iscanf(&mut source, format, args);
    let consumed = source.bytes_read().saturating_sub(1).min(s.len());
    *s = &s[consumed..];
    result
}

/// Scans by pulling characters from `source`, an arbitrary caller-supplied [`crate::source::Source`]
/// (a callback, a socket, anything that isn't a plain byte slice). Whether the scan can push a
/// trailing character back depends entirely on whether `source` overrides
/// [`crate::source::Source::unget_char`].
#[must_use]
pub fn fctscanf(
    source: &mut dyn crate::source::Source,
    format: &[u8],
    args: &mut [ScanArg<'_>],
) -> i32 {
    driver::iscanf(source, format, args)
}

/// Like [`sscanf`], but dispatches any `%!` directive in `format` to `ext`.
#[cfg(feature = "extensions")]
#[must_use]
pub fn sscanf_ext(
    input: &[u8],
    format: &[u8],
    args: &mut [ScanArg<'_>],
    ext: &mut dyn ScanExt,
) -> i32 {
    let mut source = SliceSource::new(input);
    driver::iscanf_ext(&mut source, format, args, ext)
}

/// Like [`fctscanf`], but dispatches any `%!` directive in `format` to `ext`.
#[cfg(feature = "extensions")]
#[must_use]
pub fn fctscanf_ext(
    source: &mut dyn crate::source::Source,
    format: &[u8],
    args: &mut [ScanArg<'_>],
    ext: &mut dyn ScanExt,
) -> i32 {
    driver::iscanf_ext(source, format, args, ext)
}

/// Scans from process stdin, behind a process-wide spinlock with one byte of pushback capacity.
///
/// Requires the `std` feature (this is the one entry point with no freestanding equivalent, since
/// there is no freestanding notion of "the current process's standard input").
#[cfg(feature = "std")]
#[must_use]
pub fn scanf(format: &[u8], args: &mut [ScanArg<'_>]) -> i32 {
    let mut guard = crate::source::STDIN.lock();
    driver::iscanf(&mut *guard, format, args)
}

#[cfg(test)]
mod tests;

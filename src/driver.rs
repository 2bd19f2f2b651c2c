//! The core `iscanf` state machine: walks the format string one directive at a time against a
//! [`Cursor`], dispatching to the conversion routines in [`crate::convert`] and storing through
//! [`crate::arg::ScanArg`] destinations pulled from an [`ArgCursor`].
//!
//! Mirrors scanf's single-pass, single-failure-point design: the whole call
//! has exactly one place where a match or input failure can occur, and exactly one pushback of
//! the final lookahead character happens once, at the very end, regardless of where in the format
//! string that failure happened.

use crate::arg::{ArgCursor, ScanArg};
use crate::classify::{is_space, EOF};
use crate::convert::int;
#[cfg(feature = "float")]
use crate::convert::float;
use crate::ext::ScanExt;
use crate::scanset::Scanset;
use crate::source::{Cursor, Source};

/// Runs one `scanf`-style pass over `source` driven by `format`, pulling destinations from `args`
/// in order.
///
/// Returns the number of fields successfully matched and stored, or [`crate::classify::EOF`] if
/// an input or end-of-stream failure occurred before any conversion was attempted.
#[must_use]
pub fn iscanf(source: &mut dyn Source, format: &[u8], args: &mut [ScanArg<'_>]) -> i32 {
    run_entry(source, format, args, None)
}

/// Like [`iscanf`], but dispatches any `%!` directive in `format` to `ext`.
#[cfg(feature = "extensions")]
#[must_use]
pub fn iscanf_ext(
    source: &mut dyn Source,
    format: &[u8],
    args: &mut [ScanArg<'_>],
    ext: &mut dyn ScanExt,
) -> i32 {
    run_entry(source, format, args, Some(ext))
}

fn run_entry(
    source: &mut dyn Source,
    format: &[u8],
    args: &mut [ScanArg<'_>],
    ext: Option<&mut dyn ScanExt>,
) -> i32 {
    if format.is_empty() {
        return 0;
    }
    let mut cursor = Cursor::new(source);
    let mut arg_cursor = ArgCursor::new(args);
    let (fields, tryconv, match_pending) = run(&mut cursor, format, &mut arg_cursor, ext);
    cursor.finish();
    if tryconv && match_pending {
        EOF
    } else {
        fields
    }
}

fn run(
    cursor: &mut Cursor<'_>,
    format: &[u8],
    args: &mut ArgCursor<'_, '_>,
    mut ext: Option<&mut dyn ScanExt>,
) -> (i32, bool, bool) {
    let mut fields = 0i32;
    let mut tryconv = false;
    let mut match_pending = true;
    let mut fi = 0usize;

    while fi < format.len() {
        let c = format[fi];
        fi += 1;

        if is_space(i32::from(c)) {
            while !cursor.at_eof() && is_space(cursor.peek()) {
                cursor.advance();
            }
            continue;
        }

        if c != b'%' {
            if cursor.at_eof() {
                break;
            }
            if cursor.peek() != i32::from(c) {
                if !cursor.at_eof() {
                    match_pending = false;
                }
                return (fields, tryconv, match_pending);
            }
            cursor.advance();
            continue;
        }

        #[cfg(feature = "trace")]
        log::trace!("directive at format offset {fi} ({} fields so far)", fields);

        let outcome = directive(
            cursor,
            format,
            &mut fi,
            args,
            &mut fields,
            &mut tryconv,
            &mut match_pending,
            ext.as_deref_mut(),
        );
        if outcome.is_err() {
            if !cursor.at_eof() {
                match_pending = false;
            }
            #[cfg(feature = "trace")]
            log::debug!(
                "{} at format offset {fi}, {fields} field(s) matched",
                if cursor.at_eof() { "input failure" } else { "matching failure" }
            );
            return (fields, tryconv, match_pending);
        }
    }

    (fields, tryconv, match_pending)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum LenMod {
    None,
    Short,
    ShortShort,
    Long,
    LongLong,
    Intmax,
    Size,
    PtrDiff,
    LongDouble,
}

fn parse_width(format: &[u8], fi: &mut usize) -> Option<u32> {
    if !format.get(*fi).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    while format.get(*fi) == Some(&b'0') {
        *fi += 1;
    }
    let mut value: u32 = 0;
    let mut prev: u32 = 0;
    let mut saturated = false;
    while let Some(&b) = format.get(*fi) {
        if !b.is_ascii_digit() {
            break;
        }
        *fi += 1;
        if saturated {
            continue;
        }
        let mul = value.wrapping_mul(10);
        if mul < prev {
            saturated = true;
            continue;
        }
        prev = mul;
        value = mul + u32::from(b - b'0');
    }
    if saturated {
        value = u32::MAX;
    }
    if value == 0 {
        None
    } else {
        Some(value)
    }
}

fn parse_length_modifier(format: &[u8], fi: &mut usize) -> LenMod {
    match format.get(*fi) {
        Some(b'h') => {
            *fi += 1;
            if format.get(*fi) == Some(&b'h') {
                *fi += 1;
                LenMod::ShortShort
            } else {
                LenMod::Short
            }
        }
        Some(b'l') => {
            *fi += 1;
            if format.get(*fi) == Some(&b'l') {
                *fi += 1;
                LenMod::LongLong
            } else {
                LenMod::Long
            }
        }
        Some(b'j') => {
            *fi += 1;
            LenMod::Intmax
        }
        Some(b'z') => {
            *fi += 1;
            LenMod::Size
        }
        Some(b't') => {
            *fi += 1;
            LenMod::PtrDiff
        }
        Some(b'L') => {
            *fi += 1;
            LenMod::LongDouble
        }
        _ => LenMod::None,
    }
}

#[allow(clippy::too_many_arguments)]
fn directive(
    cur: &mut Cursor<'_>,
    format: &[u8],
    fi: &mut usize,
    args: &mut ArgCursor<'_, '_>,
    fields: &mut i32,
    tryconv: &mut bool,
    match_pending: &mut bool,
    ext: Option<&mut dyn ScanExt>,
) -> Result<(), ()> {
    if format.get(*fi) == Some(&b'%') {
        *fi += 1;
        if cur.at_eof() || cur.peek() != i32::from(b'%') {
            return Err(());
        }
        cur.advance();
        return Ok(());
    }

    let nostore = if format.get(*fi) == Some(&b'*') {
        *fi += 1;
        true
    } else {
        false
    };

    let width = parse_width(format, fi);

    if format.get(*fi) == Some(&b'!') {
        if let Some(ext) = ext {
            let spec = &format[*fi + 1..];
            let dest = if nostore {
                None
            } else {
                Some(args.next().ok_or(())?)
            };
            let outcome = ext.scan(cur, width, spec, dest);
            *fi += 1 + outcome.consumed_spec;
            *tryconv = true;
            if !outcome.matched {
                return Err(());
            }
            if !nostore {
                *fields += 1;
            }
            return Ok(());
        }
    }

    let len = parse_length_modifier(format, fi);

    let Some(&spec) = format.get(*fi) else {
        return Err(());
    };
    *fi += 1;

    if !matches!(spec, b'[' | b'c' | b'n') {
        while !cur.at_eof() && is_space(cur.peek()) {
            cur.advance();
        }
    }
    if spec != b'n' {
        *tryconv = true;
        if cur.at_eof() {
            return Err(());
        }
    }

    match spec {
        b'n' => {
            if !nostore {
                let dest = args.next().ok_or(())?;
                dest.store_count(cur.read_chars() as i64).map_err(|_| ())?;
            }
            Ok(())
        }
        b'p' => read_pointer(cur, width, nostore, args, fields, match_pending),
        b'd' | b'u' | b'i' | b'o' | b'x' | b'X' => {
            read_integer(cur, width, spec, nostore, args, fields, match_pending)
        }
        #[cfg(feature = "binary")]
        b'b' => read_integer(cur, width, spec, nostore, args, fields, match_pending),
        #[cfg(feature = "float")]
        b'e' | b'E' | b'f' | b'F' | b'g' | b'G' | b'a' | b'A' => {
            read_float_directive(cur, width, nostore, args, fields, match_pending)
        }
        b'c' => {
            if len != LenMod::None {
                return Err(());
            }
            read_char(cur, width, nostore, args, fields, match_pending)
        }
        b's' => {
            if len != LenMod::None {
                return Err(());
            }
            read_string(cur, width, nostore, args, fields, match_pending)
        }
        b'[' => {
            if len != LenMod::None {
                return Err(());
            }
            read_scanset(cur, format, fi, width, nostore, args, fields, match_pending)
        }
        _ => Err(()),
    }
}

#[allow(clippy::too_many_arguments)]
fn read_integer(
    cur: &mut Cursor<'_>,
    width: Option<u32>,
    spec: u8,
    nostore: bool,
    args: &mut ArgCursor<'_, '_>,
    fields: &mut i32,
    match_pending: &mut bool,
) -> Result<(), ()> {
    let result = int::read_int(cur, width, spec).ok_or(())?;
    *match_pending = false;
    if !nostore {
        let dest = args.next().ok_or(())?;
        dest.store_int(result.bits).map_err(|_| ())?;
        *fields += 1;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn read_pointer(
    cur: &mut Cursor<'_>,
    width: Option<u32>,
    nostore: bool,
    args: &mut ArgCursor<'_, '_>,
    fields: &mut i32,
    match_pending: &mut bool,
) -> Result<(), ()> {
    let within = |n: u32| width.map_or(true, |w| n < w);
    if cur.peek() == i32::from(b'(') {
        let mut consumed = 1u32;
        cur.advance();
        for &expect in b"nil)" {
            if !within(consumed) || cur.at_eof() || cur.peek() != i32::from(expect) {
                return Err(());
            }
            cur.advance();
            consumed += 1;
        }
        *match_pending = false;
        if !nostore {
            let dest = args.next().ok_or(())?;
            dest.store_ptr(0).map_err(|_| ())?;
            *fields += 1;
        }
        return Ok(());
    }
    let result = int::read_int(cur, width, b'p').ok_or(())?;
    *match_pending = false;
    if !nostore {
        let dest = args.next().ok_or(())?;
        dest.store_ptr(result.bits as u64 as usize).map_err(|_| ())?;
        *fields += 1;
    }
    Ok(())
}

#[cfg(feature = "float")]
#[allow(clippy::too_many_arguments)]
fn read_float_directive(
    cur: &mut Cursor<'_>,
    width: Option<u32>,
    nostore: bool,
    args: &mut ArgCursor<'_, '_>,
    fields: &mut i32,
    match_pending: &mut bool,
) -> Result<(), ()> {
    let result = float::read_float(cur, width).ok_or(())?;
    *match_pending = false;
    if !nostore {
        let dest = args.next().ok_or(())?;
        dest.store_float(result.value).map_err(|_| ())?;
        *fields += 1;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn read_char(
    cur: &mut Cursor<'_>,
    width: Option<u32>,
    nostore: bool,
    args: &mut ArgCursor<'_, '_>,
    fields: &mut i32,
    match_pending: &mut bool,
) -> Result<(), ()> {
    let want = width.unwrap_or(1);
    let mut dest = if nostore {
        None
    } else {
        Some(args.next().ok_or(())?.bytes_mut().map_err(|_| ())?)
    };
    let cap = dest.as_ref().map_or(0, |d| d.len()) as u32;

    let mut written = 0u32;
    let mut consumed = 0u32;
    while consumed < want {
        if cur.at_eof() {
            break;
        }
        let c = cur.advance();
        if let Some(d) = dest.as_deref_mut() {
            if written < cap {
                d[written as usize] = c as u8;
                written += 1;
            }
        }
        consumed += 1;
    }
    if consumed < want {
        return Err(());
    }
    *match_pending = false;
    if !nostore {
        *fields += 1;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn read_string(
    cur: &mut Cursor<'_>,
    width: Option<u32>,
    nostore: bool,
    args: &mut ArgCursor<'_, '_>,
    fields: &mut i32,
    match_pending: &mut bool,
) -> Result<(), ()> {
    let mut dest = if nostore {
        None
    } else {
        Some(args.next().ok_or(())?.bytes_mut().map_err(|_| ())?)
    };
    let limit = effective_width(width, dest.as_ref().map_or(usize::MAX, |d| d.len()), true)?;

    let mut written = 0u32;
    let mut consumed = 0u32;
    while consumed < limit {
        if cur.at_eof() || is_space(cur.peek()) {
            break;
        }
        let c = cur.advance();
        if let Some(d) = dest.as_deref_mut() {
            d[written as usize] = c as u8;
            written += 1;
        }
        consumed += 1;
    }
    if consumed == 0 {
        return Err(());
    }
    *match_pending = false;
    if let Some(d) = dest.as_deref_mut() {
        d[written as usize] = 0;
        *fields += 1;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn read_scanset(
    cur: &mut Cursor<'_>,
    format: &[u8],
    fi: &mut usize,
    width: Option<u32>,
    nostore: bool,
    args: &mut ArgCursor<'_, '_>,
    fields: &mut i32,
    match_pending: &mut bool,
) -> Result<(), ()> {
    let (set, body_consumed) = Scanset::compile(&format[*fi..]);
    *fi += body_consumed;

    let mut dest = if nostore {
        None
    } else {
        Some(args.next().ok_or(())?.bytes_mut().map_err(|_| ())?)
    };
    let limit = effective_width(width, dest.as_ref().map_or(usize::MAX, |d| d.len()), true)?;

    let mut written = 0u32;
    let mut consumed = 0u32;
    while consumed < limit {
        if cur.at_eof() {
            break;
        }
        let c = cur.peek();
        if !set.matches(c as u8) {
            break;
        }
        cur.advance();
        if let Some(d) = dest.as_deref_mut() {
            d[written as usize] = c as u8;
            written += 1;
        }
        consumed += 1;
    }
    if consumed == 0 {
        return Err(());
    }
    *match_pending = false;
    if let Some(d) = dest.as_deref_mut() {
        d[written as usize] = 0;
        *fields += 1;
    }
    Ok(())
}

/// Computes the number of characters `%s`/`%[` may read: the declared format width capped to the
/// destination's capacity (minus one byte reserved for the NUL terminator), or, if no width was
/// declared, the destination's full capacity (unless the `secure` feature is enabled, in which
/// case an unbounded `%s`/`%[`, the classic buffer-overflow footgun, is rejected outright as a
/// matching failure rather than silently capped).
fn effective_width(width: Option<u32>, buf_len: usize, reserve_nul: bool) -> Result<u32, ()> {
    let cap = u32::try_from(if reserve_nul {
        buf_len.saturating_sub(1)
    } else {
        buf_len
    })
    .unwrap_or(u32::MAX);
    match width {
        Some(w) => Ok(w.min(cap)),
        None => {
            #[cfg(feature = "secure")]
            {
                Err(())
            }
            #[cfg(not(feature = "secure"))]
            {
                Ok(cap)
            }
        }
    }
}

#[cfg(test)]
mod tests;

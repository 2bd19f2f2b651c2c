//! Input sources: the thing a [`crate::driver`] state machine pulls characters from.
//!
//! C expresses "read a character" and "push a character back" as two independent function
//! pointers, because a stream either supports both or neither and `scanf`'s entry points each
//! wire up whichever pair fits their buffer. Rust has no first-class analogue of two function
//! pointers closing over the same `void *`, and holding two `&mut dyn Trait` over the same value
//! at once isn't legal here anyway. Folding both into one trait with a no-op default for
//! [`Source::unget_char`] gets the same "pushback is optional" behaviour from a single object.

use crate::classify::{is_eof, EOF};

/// A single-character input stream, widened to `i32` the way C's `getch`-style callbacks are (so
/// the EOF sentinel and a valid byte share one return type without an `Option` wrapper at every
/// call site in the driver's hot loop).
pub trait Source {
    /// Returns the next character, or [`crate::classify::EOF`] (any negative value) if the stream
    /// is exhausted or has errored.
    fn next_char(&mut self) -> i32;

    /// Pushes `c` back so the next [`Self::next_char`] call returns it again.
    ///
    /// The default does nothing. A source that cannot support this (an `sscanf`-style exhausted
    /// slice, a one-shot callback) simply leaves the default in place; the driver always calls
    /// this once at exit and relies on the no-op to make "no pushback capability" transparent.
    fn unget_char(&mut self, _c: i32) {}
}

/// Reads from a byte slice terminated either by its own end or by an embedded NUL byte, matching
/// the NUL-terminated-buffer convention `sscanf` inherits from C strings. Used for [`crate::sscanf`].
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Wraps `bytes` for reading from the start.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Source for SliceSource<'_> {
    fn next_char(&mut self) -> i32 {
        match self.bytes.get(self.pos) {
            None | Some(&0) => EOF,
            Some(&b) => {
                self.pos += 1;
                i32::from(b)
            }
        }
    }
}

/// Reads from a byte slice the same way [`SliceSource`] does, but remembers how many bytes were
/// physically read so [`crate::spscanf`] can rewind the caller's pointer afterward.
pub struct SliceCursorSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursorSource<'a> {
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Number of bytes consumed from the slice so far (including the final, unconsumed lookahead
    /// read, which the caller backs out of).
    #[must_use]
    pub const fn bytes_read(&self) -> usize {
        self.pos
    }
}

impl Source for SliceCursorSource<'_> {
    fn next_char(&mut self) -> i32 {
        match self.bytes.get(self.pos) {
            None | Some(&0) => EOF,
            Some(&b) => {
                self.pos += 1;
                i32::from(b)
            }
        }
    }
}

/// Wraps a caller-supplied `FnMut() -> i32` "get a character" callback as a [`Source`], for
/// [`crate::fctscanf`]. The caller passes a second closure for pushback only if their underlying
/// stream can actually support it; otherwise [`Source::unget_char`]'s no-op default applies.
pub struct FnSource<G, U = fn(i32)> {
    get: G,
    unget: Option<U>,
}

impl<G> FnSource<G, fn(i32)>
where
    G: FnMut() -> i32,
{
    /// Wraps `get` with no pushback support.
    pub fn new(get: G) -> Self {
        Self { get, unget: None }
    }
}

impl<G, U> FnSource<G, U>
where
    G: FnMut() -> i32,
    U: FnMut(i32),
{
    /// Wraps `get` and `unget` as a pushback-capable source.
    pub fn with_unget(get: G, unget: U) -> Self {
        Self {
            get,
            unget: Some(unget),
        }
    }
}

impl<G, U> Source for FnSource<G, U>
where
    G: FnMut() -> i32,
    U: FnMut(i32),
{
    fn next_char(&mut self) -> i32 {
        (self.get)()
    }

    fn unget_char(&mut self, c: i32) {
        if let Some(unget) = &mut self.unget {
            unget(c);
        }
    }
}

/// A process-wide, one-byte-of-pushback stdin adapter: a global singleton stream guarded by a
/// spinlock, reading through `std::io` rather than a raw syscall since this crate targets hosted
/// Rust for its `std` feature rather than a specific kernel ABI.
#[cfg(feature = "std")]
pub struct StdinSource {
    pending: Option<i32>,
}

#[cfg(feature = "std")]
impl StdinSource {
    const fn new() -> Self {
        Self { pending: None }
    }
}

#[cfg(feature = "std")]
impl Source for StdinSource {
    fn next_char(&mut self) -> i32 {
        if let Some(c) = self.pending.take() {
            return c;
        }
        use std::io::Read;
        let mut byte = [0u8; 1];
        match std::io::stdin().lock().read(&mut byte) {
            Ok(1) => i32::from(byte[0]),
            _ => EOF,
        }
    }

    fn unget_char(&mut self, c: i32) {
        self.pending = Some(c);
    }
}

#[cfg(feature = "std")]
pub static STDIN: spin::Mutex<StdinSource> = spin::Mutex::new(StdinSource::new());

/// Threads a single character of lookahead through the whole driver call, so every conversion
/// routine shares one "current character" and the final, unconsumed lookahead can be pushed back
/// exactly once when the call finishes.
pub struct Cursor<'s> {
    source: &'s mut dyn Source,
    lookahead: i32,
    primed: bool,
    read_chars: usize,
}

impl<'s> Cursor<'s> {
    /// Wraps `source`. The first character isn't read until the first [`Self::peek`] or
    /// [`Self::advance`] call, matching a scanf implementation's "prime on first use, not on
    /// construction" behaviour (an empty format string never touches the source at all).
    #[must_use]
    pub fn new(source: &'s mut dyn Source) -> Self {
        Self {
            source,
            lookahead: EOF,
            primed: false,
            read_chars: 0,
        }
    }

    /// Returns the current lookahead character without consuming it.
    pub fn peek(&mut self) -> i32 {
        if !self.primed {
            self.lookahead = self.source.next_char();
            self.primed = true;
        }
        self.lookahead
    }

    /// Returns `true` if the current lookahead is EOF.
    pub fn at_eof(&mut self) -> bool {
        is_eof(self.peek())
    }

    /// Consumes the current lookahead and primes the next one, returning the consumed character.
    /// Counts toward [`Self::read_chars`] unless the consumed character was itself EOF.
    pub fn advance(&mut self) -> i32 {
        let c = self.peek();
        if !is_eof(c) {
            self.read_chars += 1;
        }
        self.lookahead = self.source.next_char();
        c
    }

    /// Total non-EOF characters consumed so far across the whole call, for `%n`.
    #[must_use]
    pub const fn read_chars(&self) -> usize {
        self.read_chars
    }

    /// Pushes the final lookahead back to the underlying source (a no-op if it can't, or if the
    /// lookahead is EOF, matching the classic `if (!GOT_EOF() && ungetch)` guard).
    pub fn finish(self) {
        if !is_eof(self.lookahead) {
            self.source.unget_char(self.lookahead);
        }
    }
}

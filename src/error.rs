//! The [`ScanError`] type, for the one failure mode that is native to this crate's Rust surface
//! rather than to the `scanf` family's own return-code convention.
//!
//! The core driver ([`crate::iscanf`] and friends) never returns a [`Result`]; like the C
//! functions it mirrors, it reports failure through its return value (see [`crate::EOF`]). A
//! [`ScanError`] never crosses that boundary either: when a [`crate::arg::ScanArg`] destination
//! disagrees with the format string's length modifier, the driver catches it internally and
//! treats the directive as an ordinary matching failure, exactly as an unrecognized specifier
//! letter would be. The type exists so that boundary is a typed `Result` instead of a silent
//! bool, the way the rest of this crate's fallible internals are.

use core::fmt;

/// A destination supplied through a [`crate::arg::ScanArg`] does not have the width or
/// signedness implied by the format string's length modifier (e.g. an `%lld` directive paired
/// with a [`crate::arg::ScanArg::I32`] destination).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanError;

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("destination width does not match format length modifier")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScanError {}

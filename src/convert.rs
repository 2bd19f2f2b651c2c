//! Per-specifier conversion routines, each driven one character at a time from a shared
//! [`crate::source::Cursor`] rather than operating over a pre-collected buffer (there is no
//! buffer, since the crate never allocates).

#[cfg(feature = "float")]
pub mod float;
pub mod int;

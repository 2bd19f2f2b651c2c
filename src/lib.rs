//! A portable, freestanding-capable reimplementation of the classical C `scanf` formatted-input
//! engine.
//!
//! The entry points in [`api`] each wire a [`source::Source`] up to the shared [`driver::iscanf`]
//! state machine: [`sscanf`] reads from an in-memory byte slice, [`spscanf`] does the same but
//! advances the caller's slice past whatever it consumed, [`fctscanf`] reads from an arbitrary
//! caller-supplied [`source::Source`], and [`scanf`] (behind the `std` feature) reads from process
//! stdin. C's `va_list` has no Rust equivalent, so destinations are passed as an explicit
//! [`arg::ScanArg`] slice, most conveniently built with [`scan_args!`].
//!
//! ```
//! use iscanf::{scan_args, sscanf};
//!
//! let mut year = 0i32;
//! let mut name = [0u8; 16];
//! let n = sscanf(b"2024 crates.io", b"%d %s", &mut scan_args![i32 => &mut year, bytes => &mut name]);
//! assert_eq!(n, 2);
//! assert_eq!(year, 2024);
//! assert_eq!(&name[.."crates.io".len()], b"crates.io");
//! ```
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions)]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod accum;
pub mod api;
pub mod arg;
pub mod classify;
pub mod convert;
pub mod driver;
pub mod error;
pub mod ext;
pub mod scanset;
pub mod source;

pub use api::{fctscanf, sscanf, spscanf};
#[cfg(feature = "extensions")]
pub use api::{fctscanf_ext, sscanf_ext};
#[cfg(feature = "std")]
pub use api::scanf;
pub use arg::{ArgCursor, ScanArg};
pub use classify::EOF;
pub use driver::iscanf;
#[cfg(feature = "extensions")]
pub use driver::iscanf_ext;
pub use error::ScanError;
pub use ext::{ExtOutcome, ScanExt};
pub use source::{Cursor, Source};

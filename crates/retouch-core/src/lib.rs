//! Retouch Core - the raster buffer shared by every retouch crate
//!
//! This crate provides the fundamental data structures of the retouch
//! image editing library:
//!
//! - [`Raster`] - an owned, interleaved BGR image buffer with explicit
//!   row stride
//! - [`Bgr`] - a single 3-channel sample
//! - [`Error`] / [`Result`] - the shared error type
//!
//! Everything else (codecs, point-wise transforms, the editing session)
//! is built on top of these types in the sibling crates.

pub mod color;
pub mod error;
pub mod raster;

pub use color::Bgr;
pub use error::{Error, Result};
pub use raster::{BYTES_PER_PIXEL, Raster};

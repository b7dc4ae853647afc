//! Error types for retouch-core
//!
//! Provides a unified error type for raster construction and pixel
//! access. Each variant captures enough context for diagnostics
//! without exposing internal implementation details.

use thiserror::Error;

/// Retouch core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Stride is too small to hold one row of samples
    #[error("stride {stride} too small for width {width}")]
    StrideTooSmall { stride: usize, width: u32 },

    /// Supplied buffer does not match stride * height
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },

    /// Pixel coordinate outside the raster
    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height} raster")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for retouch-core operations
pub type Result<T> = std::result::Result<T, Error>;

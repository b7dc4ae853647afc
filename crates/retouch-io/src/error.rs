//! I/O error types
//!
//! Provides a unified error type for codec and display-bridge
//! operations. Each format-specific module maps its underlying
//! library errors into `IoError` variants so that callers only need
//! to handle one error type.

use thiserror::Error;

/// Error type for image I/O and display-bridge operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not recognized or not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// A format-specific decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A format-specific encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// The display bridge was handed an absent bitmap
    #[error("display bridge invoked with no source bitmap")]
    NullSource,

    /// An error from the core library (e.g. degenerate dimensions)
    #[error("core error: {0}")]
    Core(#[from] retouch_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;

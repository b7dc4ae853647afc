//! Error types for retouch-session

use thiserror::Error;

/// Errors raised by session operations.
///
/// A failed operation never changes the session: the last valid
/// baseline and preview stay observable, so a hosting shell can show
/// the message and carry on.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A transform was requested before any image was loaded
    #[error("no source image loaded")]
    NoSourceImage,

    /// Commit, save, or display requested on an empty session
    #[error("no image to display")]
    NoDisplayedImage,

    /// Format bridge failure (decode, encode, file I/O, display bridge)
    #[error("format bridge error: {0}")]
    Io(#[from] retouch_io::IoError),

    /// Transform engine failure (invalid parameters)
    #[error("transform error: {0}")]
    Filter(#[from] retouch_filter::FilterError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

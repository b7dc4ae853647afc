//! Error types for retouch-filter

use thiserror::Error;

/// Errors that can occur during transform operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type FilterResult<T> = Result<T, FilterError>;

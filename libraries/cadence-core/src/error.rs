/// Core error types for Cadence
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Cadence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Media item rejected at construction
    #[error("Invalid media: {0}")]
    InvalidMedia(String),

    /// Identifier could not be parsed
    #[error("Invalid playlist id: {0}")]
    InvalidId(String),
}

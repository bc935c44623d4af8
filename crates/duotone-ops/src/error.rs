//! Error types for duotone operations.

use thiserror::Error;

/// Error type for duotone operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Source buffer does not match the declared bitmap shape.
    #[error("invalid bitmap: {0}")]
    InvalidBitmap(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Destination buffer has the wrong size.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),
}

/// Result type for duotone operations.
pub type OpsResult<T> = Result<T, OpsError>;

use thiserror::Error;

/// Errors from object storage operations.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// The key has no backing object. Normal and user-visible.
    #[error("object not found: {0}")]
    NotFound(String),

    /// The path cannot be decoded into a storage key.
    #[error("invalid object path: {0}")]
    InvalidPath(String),

    /// The upload request is malformed. User-visible validation failure.
    #[error("invalid upload request: {0}")]
    InvalidUpload(String),

    /// The blob provider failed. Safe for the caller to retry.
    #[error("blob provider error: {0}")]
    Service(String),
}

/// Result alias for object storage operations.
pub type ObjectResult<T> = Result<T, ObjectError>;

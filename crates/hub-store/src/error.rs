use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write. Internal retry signal:
    /// the caller re-reads the winning row instead of surfacing an error.
    #[error("uniqueness conflict on {constraint}")]
    Conflict { constraint: &'static str },

    /// The addressed row does not exist.
    #[error("row not found: {0}")]
    RowNotFound(String),

    /// The backing store failed. Retryable by the caller; carries no
    /// internal detail beyond the backend's message.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn conflict(constraint: &'static str) -> Self {
        Self::Conflict { constraint }
    }

    /// Returns `true` for uniqueness-constraint violations.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

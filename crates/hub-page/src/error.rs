use thiserror::Error;

use hub_store::StoreError;

/// Errors from page composition.
#[derive(Debug, Error)]
pub enum PageError {
    /// No account owns the requested username. Normal and user-visible.
    #[error("unknown username: {0}")]
    UnknownUsername(String),

    /// The store failed. Uniqueness conflicts never reach this variant —
    /// the services resolve them internally by re-reading.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

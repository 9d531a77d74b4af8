use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),

    #[error("invalid username {0:?}: must not be empty")]
    InvalidUsername(String),

    #[error("invalid id: {0}")]
    InvalidId(String),
}

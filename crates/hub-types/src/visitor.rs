use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque visitor identity used solely for view deduplication.
///
/// Derived from the request's network origin: the forwarded-address header
/// when present, else the connection's peer address. The value is never
/// semantically validated — two requests carrying the same string are the
/// same visitor, whatever the string contains.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisitorId(String);

impl VisitorId {
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }

    /// Fallback identity when no origin information is available at all.
    pub fn unknown() -> Self {
        Self("unknown".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VisitorId({})", self.0)
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ObjectError;

/// Opaque key addressing one stored object in the backing store.
///
/// Keys are minted by the gateway (UUID v7) and never supplied by clients,
/// so a key can never name a path outside the store's namespace and a new
/// grant can never collide with an existing object.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectKey(uuid::Uuid);

impl ObjectKey {
    /// Mint a fresh, never-reused key.
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Parse the key component of an object path.
    pub fn parse(s: &str) -> Result<Self, ObjectError> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ObjectError::InvalidPath(s.to_string()))
    }
}

impl fmt::Debug for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectKey({})", self.0)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

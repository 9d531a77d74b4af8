use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::ObjectResult;
use crate::key::ObjectKey;

/// One stored object's content as served to a reader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectContent {
    pub bytes: Bytes,
    pub content_type: String,
}

impl ObjectContent {
    pub fn new(bytes: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: content_type.into(),
        }
    }

    /// Content length in bytes.
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Capability handle onto the external blob provider.
///
/// Constructed explicitly and passed down — there is no ambient
/// "current storage client". The provider is trusted to enforce the
/// time limit and write scope encoded in the URLs it signs; this
/// boundary only asks for them.
#[async_trait]
pub trait BlobClient: Send + Sync {
    /// A time-limited URL granting one client write access to exactly
    /// `key`. The key must already be minted; the provider never picks it.
    async fn signed_upload_url(&self, key: &ObjectKey, ttl: Duration) -> ObjectResult<String>;

    /// Fetch an object's content. `Ok(None)` when the key has no backing
    /// object; `Err` only for provider failures.
    async fn fetch(&self, key: &ObjectKey) -> ObjectResult<Option<ObjectContent>>;

    /// Whether the key currently has a backing object.
    async fn exists(&self, key: &ObjectKey) -> ObjectResult<bool>;
}

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use rand::RngCore;

use crate::error::ObjectResult;
use crate::key::ObjectKey;
use crate::traits::{BlobClient, ObjectContent};

/// In-memory blob backend for tests and embedding.
///
/// Signed URLs point at a reserved-for-documentation host and carry a
/// random signature token; the `put` seam stands in for the client-side
/// upload that would follow a real grant.
pub struct InMemoryBlobClient {
    objects: RwLock<HashMap<ObjectKey, ObjectContent>>,
}

impl InMemoryBlobClient {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Store content under a key, as the upload client would after
    /// receiving a grant.
    pub fn put(&self, key: ObjectKey, bytes: impl Into<Bytes>, content_type: impl Into<String>) {
        self.objects
            .write()
            .expect("lock poisoned")
            .insert(key, ObjectContent::new(bytes, content_type));
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryBlobClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobClient for InMemoryBlobClient {
    async fn signed_upload_url(&self, key: &ObjectKey, ttl: Duration) -> ObjectResult<String> {
        let mut sig = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut sig);
        Ok(format!(
            "https://blobs.example/upload/{key}?sig={}&expires={}",
            hex::encode(sig),
            ttl.as_secs()
        ))
    }

    async fn fetch(&self, key: &ObjectKey) -> ObjectResult<Option<ObjectContent>> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    async fn exists(&self, key: &ObjectKey) -> ObjectResult<bool> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.contains_key(key))
    }
}

impl std::fmt::Debug for InMemoryBlobClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBlobClient")
            .field("object_count", &self.len())
            .finish()
    }
}

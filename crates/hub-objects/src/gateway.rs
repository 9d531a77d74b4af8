use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::{ObjectError, ObjectResult};
use crate::key::ObjectKey;
use crate::traits::{BlobClient, ObjectContent};

/// Canonical encoding every stored image is coerced to, whatever the
/// client declared. Prevents stored-type spoofing: the declared type never
/// survives into metadata for image uploads.
const CANONICAL_IMAGE_TYPE: &str = "image/png";

/// How long an upload grant stays writable.
const DEFAULT_GRANT_TTL: Duration = Duration::from_secs(15 * 60);

/// An upload request as received from a client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadRequest {
    pub name: String,
    pub size: u64,
    pub content_type: String,
}

/// Metadata echoed back with a grant. `content_type` is the coerced type,
/// not necessarily the declared one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadMetadata {
    pub name: String,
    pub size: u64,
    pub content_type: String,
}

/// A scoped write grant: where to upload, and the external path the object
/// will be readable under once uploaded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadGrant {
    pub upload_url: String,
    pub object_path: String,
    pub metadata: UploadMetadata,
}

/// Issues scoped write grants for uploads and serves reads through the
/// path codec.
///
/// Holds an explicit [`BlobClient`] capability; construct one in `main`
/// and pass it down.
pub struct ObjectStorageGateway {
    blob: Arc<dyn BlobClient>,
    grant_ttl: Duration,
}

impl ObjectStorageGateway {
    pub fn new(blob: Arc<dyn BlobClient>) -> Self {
        Self {
            blob,
            grant_ttl: DEFAULT_GRANT_TTL,
        }
    }

    pub fn with_grant_ttl(mut self, ttl: Duration) -> Self {
        self.grant_ttl = ttl;
        self
    }

    /// Issue a time-limited, write-scoped upload URL for a freshly minted
    /// key.
    ///
    /// The key is server-chosen; nothing from the request reaches it, so a
    /// grant can neither overwrite an existing object nor escape the
    /// store's namespace. Declared `image/*` content types are coerced to
    /// [`CANONICAL_IMAGE_TYPE`] in the returned metadata.
    pub async fn issue_upload_grant(&self, request: UploadRequest) -> ObjectResult<UploadGrant> {
        if request.name.trim().is_empty() {
            return Err(ObjectError::InvalidUpload("missing required field: name".into()));
        }

        let key = ObjectKey::generate();
        let content_type = if request.content_type.starts_with("image/") {
            CANONICAL_IMAGE_TYPE.to_string()
        } else {
            request.content_type
        };

        let upload_url = self.blob.signed_upload_url(&key, self.grant_ttl).await?;

        tracing::debug!(%key, name = %request.name, "issued upload grant");

        Ok(UploadGrant {
            upload_url,
            object_path: codec::object_path(&key),
            metadata: UploadMetadata {
                name: request.name,
                size: request.size,
                content_type,
            },
        })
    }

    /// Serve an object addressed by its external path.
    ///
    /// A key with no backing object is `NotFound`, never a generic
    /// failure; provider errors surface as `Service`.
    pub async fn read_object(&self, path: &str) -> ObjectResult<ObjectContent> {
        let key = codec::storage_key(path)?;
        match self.blob.fetch(&key).await? {
            Some(content) => Ok(content),
            None => Err(ObjectError::NotFound(key.to_string())),
        }
    }
}

//! Object storage gateway for LinkHub.
//!
//! Uploaded binary assets (avatars, banners, background music) live in an
//! external blob store and are addressed by opaque, server-chosen keys.
//! This crate decouples those keys from the paths clients see:
//!
//! - the **codec** ([`object_path`] / [`storage_key`]) is a total,
//!   collision-free bijection between backing-store keys and externally
//!   routable `/objects/...` paths;
//! - the **gateway** ([`ObjectStorageGateway`]) issues time-limited,
//!   write-scoped upload URLs for freshly generated keys and serves reads
//!   back through the codec.
//!
//! Clients never choose keys. Every upload grant mints a new [`ObjectKey`],
//! so a stored object can never be overwritten or addressed by a traversal
//! path, and declared image content types are coerced to one canonical
//! encoding before the grant is issued.

pub mod codec;
pub mod error;
pub mod gateway;
pub mod key;
pub mod memory;
pub mod traits;

pub use codec::{normalize_object_path, object_path, storage_key, OBJECT_PATH_PREFIX};
pub use error::{ObjectError, ObjectResult};
pub use gateway::{ObjectStorageGateway, UploadGrant, UploadMetadata, UploadRequest};
pub use key::ObjectKey;
pub use memory::InMemoryBlobClient;
pub use traits::{BlobClient, ObjectContent};

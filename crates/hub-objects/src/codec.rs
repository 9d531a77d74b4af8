use crate::error::ObjectError;
use crate::key::ObjectKey;

/// Fixed prefix under which all stored objects are externally routable.
pub const OBJECT_PATH_PREFIX: &str = "/objects/";

/// Encode a storage key into its externally routable path.
///
/// Total over all gateway-minted keys: prefix plus the key verbatim.
pub fn object_path(key: &ObjectKey) -> String {
    format!("{OBJECT_PATH_PREFIX}{key}")
}

/// Decode an external path back into its storage key.
///
/// Inverse of [`object_path`]: for any minted key `k`,
/// `storage_key(&object_path(&k)) == Ok(k)`. Anything that is not a
/// well-formed `/objects/{key}` path fails with `InvalidPath`.
pub fn storage_key(path: &str) -> Result<ObjectKey, ObjectError> {
    let rest = path
        .strip_prefix(OBJECT_PATH_PREFIX)
        .ok_or_else(|| ObjectError::InvalidPath(path.to_string()))?;
    if rest.contains('/') {
        return Err(ObjectError::InvalidPath(path.to_string()));
    }
    ObjectKey::parse(rest)
}

/// Re-prefix a path that arrived without the expected prefix.
///
/// Route captures hand us the bare `{key}` segment; defensive callers may
/// also pass an already-complete path. Normalization is idempotent —
/// applying it to its own output never double-prefixes.
pub fn normalize_object_path(path: &str) -> String {
    if path.starts_with(OBJECT_PATH_PREFIX) {
        path.to_string()
    } else {
        format!("{OBJECT_PATH_PREFIX}{path}")
    }
}

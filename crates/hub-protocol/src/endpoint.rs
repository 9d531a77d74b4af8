/// HTTP endpoint paths for the LinkHub API.
pub mod endpoints {
    /// Visitor-facing page read; `{username}` appended.
    pub const PUBLIC_PROFILE: &str = "/public-profile";
    /// Upload grant issuance.
    pub const UPLOAD_REQUEST_URL: &str = "/uploads/request-url";
    /// Object reads; `{key}` appended.
    pub const OBJECTS: &str = "/objects";
    /// Owner-facing profile read/update.
    pub const PROFILE: &str = "/profile";
    /// Owner-facing link management.
    pub const LINKS: &str = "/links";
    pub const HEALTH: &str = "/health";
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_defaults() {
        let h = HealthResponse::default();
        assert_eq!(h.status, "ok");
        assert!(!h.version.is_empty());
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoints::PUBLIC_PROFILE, "/public-profile");
        assert_eq!(endpoints::UPLOAD_REQUEST_URL, "/uploads/request-url");
        assert_eq!(endpoints::OBJECTS, "/objects");
        assert_eq!(endpoints::HEALTH, "/health");
    }
}

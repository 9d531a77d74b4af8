use async_trait::async_trait;
use axum::http::HeaderMap;

use hub_types::Username;

use crate::error::ServerResult;

/// The authenticated caller, as reported by the identity collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub username: Username,
}

/// Collaborator boundary for session/authentication mechanics.
///
/// Owner-facing endpoints only need "current identity or none"; how that
/// identity was established (sessions, tokens) lives outside this server.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current(&self, headers: &HeaderMap) -> ServerResult<Option<Identity>>;
}

/// Header-backed development stand-in: trusts an `x-hub-identity` header
/// naming the caller. Not an authentication mechanism — wire a real
/// provider in front of any deployment that leaves localhost.
pub struct HeaderIdentity;

pub const IDENTITY_HEADER: &str = "x-hub-identity";

#[async_trait]
impl IdentityProvider for HeaderIdentity {
    async fn current(&self, headers: &HeaderMap) -> ServerResult<Option<Identity>> {
        let Some(raw) = headers.get(IDENTITY_HEADER).and_then(|v| v.to_str().ok()) else {
            return Ok(None);
        };
        match Username::canonicalize(raw) {
            Ok(username) => Ok(Some(Identity { username })),
            Err(_) => Ok(None),
        }
    }
}

/// Always reports "no identity". For public-read-only deployments.
pub struct NoIdentity;

#[async_trait]
impl IdentityProvider for NoIdentity {
    async fn current(&self, _headers: &HeaderMap) -> ServerResult<Option<Identity>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn header_identity_reads_and_canonicalizes() {
        let mut headers = HeaderMap::new();
        headers.insert(IDENTITY_HEADER, "Nova".parse().unwrap());
        let id = HeaderIdentity.current(&headers).await.unwrap().unwrap();
        assert_eq!(id.username, Username::canonicalize("nova").unwrap());
    }

    #[tokio::test]
    async fn missing_or_blank_header_is_none() {
        let headers = HeaderMap::new();
        assert!(HeaderIdentity.current(&headers).await.unwrap().is_none());

        let mut headers = HeaderMap::new();
        headers.insert(IDENTITY_HEADER, "   ".parse().unwrap());
        assert!(HeaderIdentity.current(&headers).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn no_identity_is_always_none() {
        let mut headers = HeaderMap::new();
        headers.insert(IDENTITY_HEADER, "nova".parse().unwrap());
        assert!(NoIdentity.current(&headers).await.unwrap().is_none());
    }
}

use std::net::SocketAddr;

use axum::http::HeaderMap;

use hub_types::VisitorId;

use crate::config::ServerConfig;

/// Proxy header naming the original client, leftmost entry first.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Derive the opaque visitor identity for view attribution.
///
/// Forwarded-address header wins when the deployment trusts it, else the
/// connection's peer address. The result is never validated as an
/// address — it only has to be stable per visitor.
pub fn visitor_identity(
    config: &ServerConfig,
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
) -> VisitorId {
    if config.trust_forwarded_for {
        if let Some(list) = headers
            .get(FORWARDED_FOR_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            if let Some(first) = list.split(',').map(str::trim).find(|s| !s.is_empty()) {
                return VisitorId::new(first);
            }
        }
    }
    match peer {
        Some(addr) => VisitorId::new(addr.ip().to_string()),
        None => VisitorId::unknown(),
    }
}

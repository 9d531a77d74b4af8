use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Derive visitor identity from the forwarded-address header when
    /// present. Disable when the server is not behind a trusted proxy.
    pub trust_forwarded_for: bool,
    /// Upper bound on declared upload sizes, in bytes.
    pub max_upload_size: u64,
    /// Seconds an upload grant stays writable.
    pub grant_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().expect("valid literal addr"),
            trust_forwarded_for: true,
            max_upload_size: 10 * 1024 * 1024,
            grant_ttl_secs: 15 * 60,
        }
    }
}

impl ServerConfig {
    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ServerError::Config(e.to_string()))
    }
}

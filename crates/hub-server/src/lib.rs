//! HTTP server for LinkHub.
//!
//! Composes the page services, the object storage gateway, and the store
//! behind the public API: visitor-facing page reads with view attribution,
//! upload grant issuance, object serving, and the owner-facing profile and
//! link management endpoints.

pub mod config;
pub mod error;
pub mod handler;
pub mod identity;
pub mod router;
pub mod server;
pub mod state;
pub mod visitor;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use identity::{HeaderIdentity, Identity, IdentityProvider, NoIdentity, IDENTITY_HEADER};
pub use router::build_router;
pub use server::HubServer;
pub use state::AppState;

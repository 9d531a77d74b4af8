use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// LinkHub HTTP server.
pub struct HubServer {
    state: AppState,
}

impl HubServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let addr = self.state.config.bind_addr;
        // Peer addresses feed visitor identity, so serve with connect info.
        let app = build_router(self.state).into_make_service_with_connect_info::<SocketAddr>();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("LinkHub server listening on {addr}");
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

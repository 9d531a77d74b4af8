use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use hub_protocol::endpoints;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all LinkHub endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            &format!("{}/:username", endpoints::PUBLIC_PROFILE),
            get(handler::public_profile),
        )
        .route(
            endpoints::UPLOAD_REQUEST_URL,
            post(handler::request_upload_url),
        )
        .route(
            &format!("{}/:key", endpoints::OBJECTS),
            get(handler::read_object),
        )
        .route(
            endpoints::PROFILE,
            get(handler::owner_profile).patch(handler::update_profile),
        )
        .route(
            endpoints::LINKS,
            get(handler::owner_links).post(handler::create_link),
        )
        .route(
            &format!("{}/:id", endpoints::LINKS),
            delete(handler::delete_link),
        )
        .route(endpoints::HEALTH, get(handler::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

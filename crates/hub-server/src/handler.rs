use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::{ConnectInfo, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Json, Response};

use hub_objects::{normalize_object_path, UploadRequest};
use hub_page::{Audience, PageError};
use hub_store::{LinkStore, ProfileStore, UserStore};
use hub_protocol::{
    HealthResponse, NewLinkRequest, PublicProfileResponse, UpdateProfileRequest, UploadUrlRequest,
    UploadUrlResponse, UploadedMetadata,
};
use hub_types::{Link, LinkId, Profile, User, Username};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;
use crate::visitor::visitor_identity;

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// `GET /public-profile/{username}` — the read-and-account operation.
///
/// Three stages: resolve (404 short-circuit), attribute (side channel,
/// failures logged and swallowed), respond. The body never depends on the
/// attribution outcome.
pub async fn public_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
) -> ServerResult<Json<PublicProfileResponse>> {
    let canonical = Username::canonicalize(&username)
        .map_err(|_| ServerError::Page(PageError::UnknownUsername(username)))?;

    let page = state.resolver.resolve(&canonical, Audience::Public).await?;

    let visitor = visitor_identity(&state.config, &headers, connect_info.map(|c| c.0));
    if let Err(e) = state.attribution.record_view(page.user.id, &visitor).await {
        tracing::warn!(user = %page.user.id, error = %e, "view attribution failed");
    }

    Ok(Json(PublicProfileResponse {
        user: page.user.to_public(),
        profile: page.profile,
        links: page.links,
    }))
}

/// `POST /uploads/request-url` — issue a scoped write grant.
pub async fn request_upload_url(
    State(state): State<AppState>,
    Json(request): Json<UploadUrlRequest>,
) -> ServerResult<Json<UploadUrlResponse>> {
    if request.size > state.config.max_upload_size {
        return Err(ServerError::Validation(format!(
            "upload exceeds size limit of {} bytes",
            state.config.max_upload_size
        )));
    }

    let grant = state
        .gateway
        .issue_upload_grant(UploadRequest {
            name: request.name,
            size: request.size,
            content_type: request.content_type,
        })
        .await?;

    Ok(Json(UploadUrlResponse {
        upload_url: grant.upload_url,
        object_path: grant.object_path,
        metadata: UploadedMetadata {
            name: grant.metadata.name,
            size: grant.metadata.size,
            content_type: grant.metadata.content_type,
        },
    }))
}

/// `GET /objects/{key}` — serve a stored object.
pub async fn read_object(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ServerResult<Response> {
    // The route capture hands us the bare key; re-prefix defensively
    // (idempotent, so an already-complete path passes through).
    let path = normalize_object_path(&key);
    let content = state.gateway.read_object(&path).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content.content_type.as_str())
        .header(header::CONTENT_LENGTH, content.len())
        .body(Body::from(content.bytes))
        .map_err(|e| ServerError::Internal(e.to_string()))
}

/// Resolve the calling owner or fail with 401.
async fn current_owner(state: &AppState, headers: &HeaderMap) -> ServerResult<User> {
    let identity = state
        .identity
        .current(headers)
        .await?
        .ok_or(ServerError::Unauthorized)?;
    state
        .store
        .find_by_username(&identity.username)
        .await?
        .ok_or(ServerError::Unauthorized)
}

/// `GET /profile` — the owner's profile, lazily materialized like the
/// public path.
pub async fn owner_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ServerResult<Json<Profile>> {
    let owner = current_owner(&state, &headers).await?;
    let page = state
        .resolver
        .resolve(&owner.canonical_username(), Audience::Owner)
        .await?;
    Ok(Json(page.profile))
}

/// `PATCH /profile` — apply partial updates on top of the stored profile.
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateProfileRequest>,
) -> ServerResult<Json<Profile>> {
    let owner = current_owner(&state, &headers).await?;
    let page = state
        .resolver
        .resolve(&owner.canonical_username(), Audience::Owner)
        .await?;
    let updated = state
        .store
        .update_profile(request.apply_to(page.profile))
        .await?;
    Ok(Json(updated))
}

/// `GET /links` — every link, disabled ones included, display-ordered.
pub async fn owner_links(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ServerResult<Json<Vec<Link>>> {
    let owner = current_owner(&state, &headers).await?;
    let page = state
        .resolver
        .resolve(&owner.canonical_username(), Audience::Owner)
        .await?;
    Ok(Json(page.links))
}

/// `POST /links` — add a link, subject to the account quota.
pub async fn create_link(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<NewLinkRequest>,
) -> ServerResult<(StatusCode, Json<Link>)> {
    let owner = current_owner(&state, &headers).await?;

    let existing = state.store.links_for(owner.id).await?;
    if existing.len() as u32 >= owner.max_links {
        return Err(ServerError::Validation(format!(
            "link limit of {} reached",
            owner.max_links
        )));
    }

    let link = state
        .store
        .insert_link(request.into_new_link(owner.id))
        .await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// `DELETE /links/{id}` — remove one of the caller's links.
pub async fn delete_link(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ServerResult<StatusCode> {
    let owner = current_owner(&state, &headers).await?;
    let link_id = LinkId::parse(&id).map_err(|_| ServerError::NotFound("link".into()))?;

    if state.store.delete_link(owner.id, link_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::NotFound("link".into()))
    }
}

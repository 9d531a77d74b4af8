//! Wire types for the LinkHub HTTP API.
//!
//! Request and response bodies plus the endpoint paths they travel on,
//! shared by the server and any future client. Field names follow the
//! JSON convention the front end already speaks (camelCase, `uploadURL`).

pub mod api;
pub mod endpoint;

pub use api::{
    ErrorBody, NewLinkRequest, PublicProfileResponse, UpdateProfileRequest, UploadUrlRequest,
    UploadUrlResponse, UploadedMetadata,
};
pub use endpoint::{endpoints, HealthResponse};

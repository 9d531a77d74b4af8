use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use hub_objects::ObjectError;
use hub_page::PageError;
use hub_protocol::ErrorBody;
use hub_store::StoreError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("authentication required")]
    Unauthorized,

    #[error("page error: {0}")]
    Page(#[from] PageError),

    #[error("object error: {0}")]
    Object(#[from] ObjectError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Status plus the user-visible message. 5xx messages are generic;
    /// the real cause goes to the log, never the body.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "authentication required".into()),

            Self::Page(PageError::UnknownUsername(_)) => {
                (StatusCode::NOT_FOUND, "user not found".into())
            }
            // An unknown key and a path that decodes to no key both name
            // nothing: 404, never a generic failure.
            Self::Object(ObjectError::NotFound(_)) | Self::Object(ObjectError::InvalidPath(_)) => {
                (StatusCode::NOT_FOUND, "object not found".into())
            }
            Self::Object(ObjectError::InvalidUpload(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".into(),
            ),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorBody::new(message))).into_response()
    }
}

use super::types::ApiResponse;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures reported to HTTP clients as `{ success: false, error: <message> }`.
///
/// The 400 messages are this service's own wording. Earlier deployments answered a
/// missing document with "Index name and document are required"; clients should key
/// on the status code and `success` flag rather than on the text.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Document is required")]
    MissingPayload,
    #[error("Search term is required")]
    MissingQuery,
    /// The engine call failed; carries the underlying message.
    #[error("{0}")]
    UpstreamFailure(String),
    #[error("Unexpected response structure")]
    UnexpectedUpstreamShape,
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingPayload | Self::MissingQuery => StatusCode::BAD_REQUEST,
            Self::UpstreamFailure(_) | Self::UnexpectedUpstreamShape => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<anyhow::Error> for GatewayError {
    fn from(err: anyhow::Error) -> Self {
        let message = format!("{:#}", err);
        if message.trim().is_empty() {
            Self::UpstreamFailure("Upstream request failed".to_string())
        } else {
            Self::UpstreamFailure(message)
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

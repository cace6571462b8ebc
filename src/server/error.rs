//! Mapping from service failures to HTTP responses

use crate::service::ServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

/// Error body returned for 4xx responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Failure of an HTTP handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// Path segment that is not a game id at all
    #[error("Game not found")]
    InvalidId(String),
    /// Service call that panicked or was cancelled on the blocking pool
    #[error("service task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(ServiceError::Guess(_)) => StatusCode::BAD_REQUEST,
            Self::Service(ServiceError::NotFound(_)) | Self::InvalidId(_) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::NoWords | ServiceError::Persistence(_)) | Self::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self, "Request failed");
            return status.into_response();
        }

        warn!(status = status.as_u16(), error = %self, "Request rejected");
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

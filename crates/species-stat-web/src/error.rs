//! API errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use species_stat_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body: `{ "error": { "code", "message" } }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ApiError::Store(StoreError::UnknownUser(_)) => (StatusCode::NOT_FOUND, "UNKNOWN_USER"),
            ApiError::Store(StoreError::UnknownContact { .. }) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_CONTACT")
            }
            ApiError::Store(StoreError::UnknownChoice(_)) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_CHOICE")
            }
            ApiError::Store(StoreError::MissingCustomSpecies) => {
                (StatusCode::BAD_REQUEST, "MISSING_CUSTOM_SPECIES")
            }
            ApiError::Store(StoreError::UserinfoAlreadySet(_)) => {
                (StatusCode::CONFLICT, "USERINFO_ALREADY_SET")
            }
            ApiError::Store(_) | ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = serde_json::json!({
            "error": ErrorBody {
                code,
                message: self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

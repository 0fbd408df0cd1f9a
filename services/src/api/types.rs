//! Shared types for API endpoints.

use crate::database::SqlStorageError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Generic error response body.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiErrorResponse {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: "not_found".to_owned(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: "bad_request".to_owned(),
            message: message.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self {
            error: "internal_error".to_owned(),
            message: message.into(),
        }
    }
}

pub fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiErrorResponse::bad_request(message)),
    )
        .into_response()
}

/// Maps a storage failure to a response, logging database errors.
///
/// `action` completes the sentence "Failed to ...", e.g. `"list tags"`.
pub fn storage_error(action: &str, err: SqlStorageError) -> Response {
    match err {
        SqlStorageError::NotFound(what) => (
            StatusCode::NOT_FOUND,
            Json(ApiErrorResponse::not_found(format!("Not found: {what}"))),
        )
            .into_response(),
        SqlStorageError::Db(e) => {
            tracing::error!("Failed to {}: {}", action, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiErrorResponse::internal_error(format!("Failed to {action}"))),
            )
                .into_response()
        }
    }
}

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shelf_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
/// Store errors convert via `From`, so handlers can use `?` directly on
/// store calls.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or more field rules were violated; carries the field -> message map.
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),

    /// The requested id has no live record (also used for malformed ids,
    /// per this system's convention).
    #[error("the requested resource could not be found")]
    NotFound,

    /// Version mismatch detected at commit time.
    #[error("unable to update the record due to an edit conflict, please try again")]
    EditConflict,

    /// The request body could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// An unclassified storage failure, surfaced as an opaque 500.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound,
            StoreError::EditConflict => AppError::EditConflict,
            StoreError::Storage(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_FAILED",
                self.to_string(),
            ),
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            AppError::EditConflict => {
                (StatusCode::CONFLICT, "EDIT_CONFLICT", self.to_string())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = match self {
            AppError::Validation(fields) => json!({
                "error": message,
                "code": code,
                "fields": fields,
            }),
            _ => json!({
                "error": message,
                "code": code,
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

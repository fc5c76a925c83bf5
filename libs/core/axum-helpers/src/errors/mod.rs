pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::response::{ApiResponse, ErrorResponse};

/// Application error type that can be converted to HTTP responses.
///
/// Client errors render as `{"message": ...}` with status 400 or 404.
/// Storage failures render as `{"message": "DATABASE ERROR", "error": ...}`
/// with status 500. Callers are expected to log failures with their own
/// context before converting; rendering only logs client errors at `debug`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_)
            | AppError::InvalidInput(_)
            | AppError::JsonExtractorRejection(_)
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::InvalidId(raw) => {
                tracing::debug!(id = %raw, "Rejected malformed id");
                (status, Json(ApiResponse::message(messages::INVALID_ID_FORMAT))).into_response()
            }
            AppError::InvalidInput(reason) => {
                tracing::debug!(%reason, "Rejected invalid input");
                (status, Json(ApiResponse::message(messages::INVALID_INPUT_DATA))).into_response()
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::debug!("JSON extraction error: {}", e.body_text());
                (status, Json(ApiResponse::message(messages::INVALID_INPUT_DATA))).into_response()
            }
            AppError::ValidationError(e) => {
                tracing::debug!("Validation error: {:?}", e);
                (status, Json(ApiResponse::message(messages::INVALID_INPUT_DATA))).into_response()
            }
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (status, Json(ApiResponse::message(msg))).into_response()
            }
            AppError::Database(description) => {
                (status, Json(ErrorResponse::database(description))).into_response()
            }
        }
    }
}

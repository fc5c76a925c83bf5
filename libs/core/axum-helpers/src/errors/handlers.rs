use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};

use super::{AppError, messages};

/// Fallback handler for unmatched routes.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(messages::NOT_FOUND_RESOURCE.to_string()).into_response()
}

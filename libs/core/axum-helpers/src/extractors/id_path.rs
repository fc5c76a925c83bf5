//! Integer id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extractor for a single `i64` path parameter.
///
/// The whole segment must parse as an integer: `"1.5"`, `"12abc"` and `" 7"`
/// are rejected with [`AppError::InvalidId`].
///
/// Handlers that need a different rejection can take
/// `Result<IdPath, AppError>` and map the error themselves.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::delete;
/// use axum_helpers::extractors::IdPath;
///
/// async fn remove(IdPath(id): IdPath) -> String {
///     format!("Removing {}", id)
/// }
///
/// let app = Router::new().route("/products/{id}", delete(remove));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidId(e.body_text()))?;

        raw.parse::<i64>()
            .map(IdPath)
            .map_err(|_| AppError::InvalidId(raw))
    }
}

//! Reusable OpenAPI response types for consistent API documentation.

use crate::response::{ApiResponse, ErrorResponse};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Storage failure",
    content_type = "application/json",
    example = json!({
        "message": "DATABASE ERROR",
        "error": "connection refused"
    })
)]
pub struct DatabaseErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid body or id",
    content_type = "application/json",
    example = json!({
        "message": "Invalid input data"
    })
)]
pub struct InvalidInputResponse(pub ApiResponse<String>);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed id",
    content_type = "application/json",
    example = json!({
        "message": "Invalid ID format"
    })
)]
pub struct InvalidIdResponse(pub ApiResponse<String>);

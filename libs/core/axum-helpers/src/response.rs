//! JSON envelopes shared by every endpoint.
//!
//! Successful calls and client errors answer with [`ApiResponse`]:
//!
//! ```json
//! { "message": "OK", "result": [ { "id": 1, "name": "Widget", "price": 9.99 } ] }
//! { "message": "Invalid ID format" }
//! ```
//!
//! Storage failures answer with [`ErrorResponse`]:
//!
//! ```json
//! { "message": "DATABASE ERROR", "error": "connection refused" }
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::messages;

/// Envelope for successful responses and client errors.
///
/// `result` is omitted from the JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Human-readable outcome, e.g. `"OK"` or `"Invalid input data"`
    pub message: String,
    /// Operation payload, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// `{"message": "OK", "result": result}`
    pub fn ok(result: T) -> Self {
        Self::with_result(messages::OK, result)
    }

    pub fn with_result(message: impl Into<String>, result: T) -> Self {
        Self {
            message: message.into(),
            result: Some(result),
        }
    }
}

impl ApiResponse<()> {
    /// An envelope carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            result: None,
        }
    }
}

/// Envelope for server-side failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Failure category, e.g. `"DATABASE ERROR"`
    pub message: String,
    /// Underlying error description
    pub error: String,
}

impl ErrorResponse {
    /// Builds a storage failure envelope. An empty description becomes `"Unknown error"`.
    pub fn database(description: impl Into<String>) -> Self {
        let description = description.into();
        Self {
            message: messages::DATABASE_ERROR.to_string(),
            error: if description.trim().is_empty() {
                messages::UNKNOWN_ERROR.to_string()
            } else {
                description
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_carries_result() {
        let body = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(body, json!({"message": "OK", "result": [1, 2]}));
    }

    #[test]
    fn test_message_envelope_omits_result() {
        let body = serde_json::to_value(ApiResponse::message("Invalid ID format")).unwrap();
        assert_eq!(body, json!({"message": "Invalid ID format"}));
    }

    #[test]
    fn test_empty_result_list_is_kept() {
        let body = serde_json::to_value(ApiResponse::<Vec<i32>>::ok(vec![])).unwrap();
        assert_eq!(body, json!({"message": "OK", "result": []}));
    }

    #[test]
    fn test_database_envelope_defaults_unknown_error() {
        assert_eq!(ErrorResponse::database("").error, "Unknown error");
        assert_eq!(ErrorResponse::database("timeout").error, "timeout");
        assert_eq!(ErrorResponse::database("timeout").message, "DATABASE ERROR");
    }
}

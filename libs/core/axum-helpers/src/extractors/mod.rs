//! Custom extractors for Axum handlers.
//!
//! Both reject with [`crate::errors::AppError`], so handlers see a uniform
//! 400 envelope for malformed ids and bodies.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;

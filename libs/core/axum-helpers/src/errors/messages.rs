//! Message strings carried in response envelopes.

pub const OK: &str = "OK";
pub const INVALID_ID_FORMAT: &str = "Invalid ID format";
pub const INVALID_INPUT_DATA: &str = "Invalid input data";
pub const DATABASE_ERROR: &str = "DATABASE ERROR";
pub const UNKNOWN_ERROR: &str = "Unknown error";
pub const NOT_FOUND_RESOURCE: &str = "Requested resource was not found";

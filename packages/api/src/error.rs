//! Standard error response body.

use serde::{Deserialize, Serialize};

/// The JSON body returned for all error responses.
///
/// ```json
/// { "error": "Method not allowed" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable description of the problem.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Fixed messages for errors that carry no request-specific detail.
pub mod messages {
    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
    pub const NOT_FOUND: &str = "Not found";
    pub const PAYLOAD_TOO_LARGE: &str = "Payload too large";
}

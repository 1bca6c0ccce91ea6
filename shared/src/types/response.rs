//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
///
/// `error` is a stable machine-readable code; `message` is human-readable
/// and may change between releases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false` on the error path
    pub success: bool,

    /// Stable error code, e.g. `invalid_token`
    pub error: String,

    /// Human-readable description
    pub message: String,
}

impl ErrorResponse {
    /// Create an error response with a code and message
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}

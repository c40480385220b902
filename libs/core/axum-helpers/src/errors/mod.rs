pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error body returned by the fallback handlers.
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "NotFound",
///   "message": "The requested resource was not found"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }
}

//! Error classification and structured API error details.

use serde::{Deserialize, Serialize};

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or unusable credentials/config. Fatal.
    Configuration,
    /// The request was rejected locally before any network call.
    Validation,
    /// Network failure or non-2xx status.
    Transport,
    /// The server answered 2xx but the body was unusable.
    Response,
}

/// Structured contents of an `{"error": {...}}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ErrorDetails {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetails,
}

impl ErrorDetails {
    /// Extract details from a JSON error body. Returns `None` when the body is
    /// not JSON or has no `error` object.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .map(|envelope| envelope.error)
    }
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    CheckConfiguration,
    FixRequest,
    RetryLater,
    CheckCredentials,
    ContactSupport,
}

//! Error types for sonar.

pub mod unified;

pub use unified::{ErrorCategory, ErrorDetails, RecoverySuggestion};

use thiserror::Error;

/// Primary error type for all sonar operations.
#[derive(Error, Debug)]
pub enum SonarError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid model '{model}'. Available models are: {}", valid.join(", "))]
    InvalidModel { model: String, valid: Vec<String> },

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Non-2xx response. `message` is the server's error message when the body
    /// carried one, otherwise the raw body text.
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<ErrorDetails>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("No choices in response")]
    EmptyChoices { body: serde_json::Value },
}

impl SonarError {
    /// Create an API error from a status code and an unparsed body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            details: None,
        }
    }

    /// Create an API error with structured details.
    pub fn api_with_details(status: u16, message: impl Into<String>, details: ErrorDetails) -> Self {
        Self::Api {
            status,
            message: message.into(),
            details: Some(details),
        }
    }

    /// Build an API error from a non-2xx response body, pulling out the
    /// `{"error": {...}}` object when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        match ErrorDetails::from_body(body) {
            Some(details) => {
                let message = details
                    .message
                    .clone()
                    .unwrap_or_else(|| body.to_string());
                Self::api_with_details(status, message, details)
            }
            None => Self::api(status, body),
        }
    }

    /// Structured details of an API error, if the server sent any.
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            Self::Api { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::InvalidModel { .. } | Self::InvalidMessage(_) | Self::ModelNotFound(_) => {
                ErrorCategory::Validation
            }
            Self::Api { .. } | Self::Network(_) => ErrorCategory::Transport,
            Self::MalformedResponse(_) | Self::EmptyChoices { .. } => ErrorCategory::Response,
        }
    }

    /// Whether repeating the same call could plausibly succeed.
    ///
    /// The client never retries on its own; this only informs the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Api { status, .. } => *status == 429 || (500..=599).contains(status),
            _ => false,
        }
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self {
            Self::Configuration(_) => RecoverySuggestion::CheckConfiguration,
            Self::Api { status: 401 | 403, .. } => RecoverySuggestion::CheckCredentials,
            _ if self.is_retryable() => RecoverySuggestion::RetryLater,
            _ if self.category() == ErrorCategory::Validation => RecoverySuggestion::FixRequest,
            Self::Api { status: 400..=499, .. } => RecoverySuggestion::FixRequest,
            _ => RecoverySuggestion::ContactSupport,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SonarError>;

//! Whole-body response decoding.

use serde_json::Value;
use tracing::warn;

use crate::error::{Result, SonarError};
use crate::types::ChatResponse;

/// Decode a successful (2xx) response body.
///
/// A body that is not JSON is `MalformedResponse`. A body without a non-empty
/// `choices` array is `EmptyChoices`, even though the HTTP status was a
/// success.
pub fn parse_completion(body: &str) -> Result<ChatResponse> {
    let value: Value = serde_json::from_str(body)?;

    let has_choices = value
        .get("choices")
        .and_then(Value::as_array)
        .is_some_and(|choices| !choices.is_empty());
    if !has_choices {
        warn!(body = %value, "no choices in response");
        return Err(SonarError::EmptyChoices { body: value });
    }

    Ok(serde_json::from_value(value)?)
}

//! Shared HTTP client and per-request headers.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::error::SonarError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// Timeouts are left at reqwest's defaults.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(reqwest::Client::new)
}

/// The `Authorization` value for `api_key`, marked sensitive.
///
/// A key that cannot be sent as a header (control characters, non-visible
/// bytes) is a configuration error.
pub fn bearer_value(api_key: &str) -> Result<HeaderValue, SonarError> {
    let mut val = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
        SonarError::Configuration("API key contains characters not allowed in a header".into())
    })?;
    val.set_sensitive(true);
    Ok(val)
}

/// Build the header set for one request.
///
/// Always built fresh, never shared between calls.
pub fn request_headers(auth: &HeaderValue, accept: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static(accept));
    headers.insert(AUTHORIZATION, auth.clone());
    headers
}

/// Turn a non-2xx status and its body into an error.
pub fn status_to_error(status: u16, body: &str) -> SonarError {
    SonarError::from_status(status, body)
}

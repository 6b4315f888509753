//! Perplexity chat-completions client.

use std::borrow::Cow;

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use tracing::{debug, warn};

use crate::config::SonarConfig;
use crate::error::SonarError;
use crate::types::{ChatRequest, ChatResponse};

use super::http::{bearer_value, request_headers, shared_client, status_to_error};
use super::response::parse_completion;
use super::sse::{parse_stream, sse_lines};
use super::{FragmentStream, ModelProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";
const COMPLETIONS_PATH: &str = "/chat/completions";

/// Client for `POST /chat/completions`.
///
/// Holds no mutable state: headers are built per request, so one client can
/// be reused for any number of sequential calls.
pub struct CompletionClient {
    auth: HeaderValue,
    base_url: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl CompletionClient {
    /// Create a client from config. Fails when no API key is configured or
    /// the key cannot be sent as a header.
    pub fn new(config: &SonarConfig) -> Result<Self, SonarError> {
        let auth = bearer_value(config.require_api_key()?)?;
        let base_url = config
            .base_url()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            auth,
            base_url,
            http: shared_client().clone(),
        })
    }

    /// Create a client from the process-wide config.
    pub fn from_env() -> Result<Self, SonarError> {
        Self::new(SonarConfig::global())
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> String {
        format!("{}{COMPLETIONS_PATH}", self.base_url)
    }

    async fn send(&self, request: &ChatRequest) -> Result<reqwest::Response, SonarError> {
        let url = self.endpoint();
        debug!(
            url = %url,
            model = %request.model,
            stream = request.stream,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let resp = self
            .http
            .post(&url)
            .headers(request_headers(&self.auth, request.accept()))
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        debug!(status = status.as_u16(), "chat completion response");
        if !status.is_success() {
            let body = resp.text().await.map_err(|e| {
                warn!(status = status.as_u16(), error = %e, "failed to read error body");
                SonarError::Network(e)
            })?;
            return Err(status_to_error(status.as_u16(), &body));
        }
        Ok(resp)
    }
}

/// The request with its `stream` flag forced to `stream`.
fn with_stream(request: &ChatRequest, stream: bool) -> Cow<'_, ChatRequest> {
    if request.stream == stream {
        Cow::Borrowed(request)
    } else {
        Cow::Owned(ChatRequest {
            stream,
            ..request.clone()
        })
    }
}

#[async_trait]
impl ModelProvider for CompletionClient {
    fn provider_name(&self) -> &str {
        "perplexity"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, SonarError> {
        let request = with_stream(request, false);
        let resp = self.send(&request).await?;
        let body = resp.text().await?;
        parse_completion(&body)
    }

    async fn stream(&self, request: &ChatRequest) -> Result<FragmentStream, SonarError> {
        let request = with_stream(request, true);
        let resp = self.send(&request).await?;
        Ok(parse_stream(sse_lines(resp.bytes_stream())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenerationSettings;

    #[test]
    fn construction_requires_api_key() {
        let err = CompletionClient::new(&SonarConfig::new()).unwrap_err();
        assert!(matches!(err, SonarError::Configuration(_)));
    }

    #[test]
    fn construction_rejects_key_unusable_as_header() {
        let err = CompletionClient::new(&SonarConfig::new().with_api_key("pplx-abc\n")).unwrap_err();
        assert!(matches!(err, SonarError::Configuration(_)));
    }

    #[test]
    fn endpoint_defaults_to_perplexity() {
        let client = CompletionClient::new(&SonarConfig::new().with_api_key("k")).unwrap();
        assert_eq!(client.endpoint(), "https://api.perplexity.ai/chat/completions");
    }

    #[test]
    fn endpoint_honours_base_url_without_double_slash() {
        let config = SonarConfig::new()
            .with_api_key("k")
            .with_base_url("http://127.0.0.1:8080/");
        let client = CompletionClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8080/chat/completions");
    }

    #[test]
    fn debug_hides_api_key() {
        let client = CompletionClient::new(&SonarConfig::new().with_api_key("secret")).unwrap();
        assert!(!format!("{client:?}").contains("secret"));
    }

    #[test]
    fn with_stream_only_clones_on_mismatch() {
        let request = ChatRequest::build("sonar", "Hi", &GenerationSettings::default()).unwrap();
        assert!(matches!(with_stream(&request, false), Cow::Borrowed(_)));
        let streamed = with_stream(&request, true);
        assert!(streamed.stream);
        assert_eq!(streamed.accept(), "text/event-stream");
    }
}

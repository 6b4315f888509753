//! Chat request construction and validation.

use serde::Serialize;
use serde_json::Value;

use super::generation::{GenerationSettings, DEFAULT_SYSTEM_PROMPT};
use super::message::{validate_messages, Message};
use crate::error::{Result, SonarError};
use crate::models;

/// `Accept` value for a streamed response.
pub const ACCEPT_EVENT_STREAM: &str = "text/event-stream";
/// `Accept` value for a single JSON response.
pub const ACCEPT_JSON: &str = "application/json";

/// What the caller wants to say: a single prompt, or a full conversation.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageInput {
    /// Expanded to `[system, user]` when the request is built.
    Prompt(String),
    /// An already typed conversation, sent as-is.
    Messages(Vec<Message>),
    /// An untyped conversation, validated entry by entry.
    Raw(Vec<Value>),
}

impl From<&str> for MessageInput {
    fn from(prompt: &str) -> Self {
        Self::Prompt(prompt.to_string())
    }
}

impl From<String> for MessageInput {
    fn from(prompt: String) -> Self {
        Self::Prompt(prompt)
    }
}

impl From<Vec<Message>> for MessageInput {
    fn from(messages: Vec<Message>) -> Self {
        Self::Messages(messages)
    }
}

impl From<Vec<Value>> for MessageInput {
    fn from(raw: Vec<Value>) -> Self {
        Self::Raw(raw)
    }
}

/// A validated request body, ready for the wire.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stream: bool,
}

impl ChatRequest {
    /// Validate and assemble a request.
    ///
    /// Fails with `InvalidModel` for names outside the catalog and with
    /// `InvalidMessage` for any malformed message. Numeric settings are never
    /// rejected, only clamped.
    pub fn build(
        model: &str,
        input: impl Into<MessageInput>,
        settings: &GenerationSettings,
    ) -> Result<Self> {
        if !models::is_valid_model_name(model) {
            return Err(SonarError::InvalidModel {
                model: model.to_string(),
                valid: models::model_names().into_iter().map(String::from).collect(),
            });
        }

        let messages = match input.into() {
            MessageInput::Prompt(prompt) => vec![
                Message::system(
                    settings
                        .system_prompt
                        .as_deref()
                        .unwrap_or(DEFAULT_SYSTEM_PROMPT),
                ),
                Message::user(prompt),
            ],
            MessageInput::Messages(messages) => messages,
            MessageInput::Raw(raw) => validate_messages(&raw)?,
        };

        if messages.is_empty() {
            return Err(SonarError::InvalidMessage(
                "a request needs at least one message".into(),
            ));
        }

        Ok(Self {
            model: model.to_string(),
            messages,
            temperature: clamp_temperature(settings.temperature),
            max_tokens: settings.max_tokens.map(clamp_max_tokens),
            stream: settings.stream,
        })
    }

    /// The `Accept` header this request must be sent with; the server picks
    /// the response framing from it.
    pub fn accept(&self) -> &'static str {
        if self.stream {
            ACCEPT_EVENT_STREAM
        } else {
            ACCEPT_JSON
        }
    }
}

/// Clamp a temperature into `[0.0, 1.0]`.
///
/// The upper bound is applied first, so NaN becomes `1.0`.
pub fn clamp_temperature(temperature: f64) -> f64 {
    temperature.min(1.0).max(0.0)
}

/// Clamp a token limit to at least 1.
pub fn clamp_max_tokens(max_tokens: i64) -> u64 {
    max_tokens.max(1) as u64
}

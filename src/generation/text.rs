//! Non-streaming generation.

use tracing::debug;

use crate::error::SonarError;
use crate::provider::ModelProvider;
use crate::types::*;

/// Validate, send, and decode a single chat completion.
///
/// Validation errors are returned before the provider is touched. `stream`
/// in `settings` is ignored; use [`super::stream_text`] for streaming.
pub async fn generate_text(
    provider: &dyn ModelProvider,
    model: &str,
    input: impl Into<MessageInput>,
    settings: &GenerationSettings,
) -> Result<ChatResponse, SonarError> {
    let request = ChatRequest::build(model, input, &settings.clone().streaming(false))?;

    debug!(provider = provider.provider_name(), model, "generate_text");
    provider.complete(&request).await
}

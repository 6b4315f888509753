//! Streaming generation and partial-content assembly.

use futures::StreamExt;
use tracing::debug;

use crate::error::SonarError;
use crate::provider::{FragmentStream, ModelProvider};
use crate::types::*;

/// Validate, send, and return the lazy fragment stream.
///
/// The stream ends after [`StreamFragment::Done`] or when the body runs out.
/// Dropping it early closes the connection.
pub async fn stream_text(
    provider: &dyn ModelProvider,
    model: &str,
    input: impl Into<MessageInput>,
    settings: &GenerationSettings,
) -> Result<FragmentStream, SonarError> {
    let request = ChatRequest::build(model, input, &settings.clone().streaming(true))?;

    debug!(provider = provider.provider_name(), model, "stream_text");
    provider.stream(&request).await
}

/// Drain a fragment stream into the full assistant text.
pub async fn collect_stream(mut stream: FragmentStream) -> Result<StreamTextResult, SonarError> {
    let mut result = StreamTextResult::default();

    while let Some(fragment) = stream.next().await {
        match fragment? {
            StreamFragment::Delta(text) => {
                result.text.push_str(&text);
                result.fragments += 1;
            }
            StreamFragment::Done => {
                result.completed = true;
                break;
            }
        }
    }

    Ok(result)
}

//! Convenience functions using the process-wide config.

use crate::error::SonarError;
use crate::provider::{CompletionClient, FragmentStream};
use crate::types::GenerationSettings;

/// Simple generation: model + prompt → text, with default settings.
pub async fn ask(model: &str, prompt: impl Into<String>) -> Result<String, SonarError> {
    let client = CompletionClient::from_env()?;
    let response = super::text::generate_text(
        &client,
        model,
        prompt.into(),
        &GenerationSettings::default(),
    )
    .await?;
    Ok(response.text().to_string())
}

/// Simple streaming generation: model + prompt → fragment stream.
pub async fn ask_stream(
    model: &str,
    prompt: impl Into<String>,
) -> Result<FragmentStream, SonarError> {
    let client = CompletionClient::from_env()?;
    super::stream::stream_text(&client, model, prompt.into(), &GenerationSettings::default())
        .await
}

//! Web-search capability probe.
//!
//! This is a heuristic. The model is asked something only live retrieval can
//! answer and told to say a fixed refusal phrase if it cannot search; the
//! probe then looks for that phrase. Models can paraphrase the refusal or
//! hallucinate an answer, so both false positives and false negatives happen.

use tracing::{debug, warn};

use crate::provider::ModelProvider;
use crate::types::GenerationSettings;

pub const PROBE_PROMPT: &str = "What is the current time in New York? (This requires web search)";
pub const PROBE_SYSTEM_PROMPT: &str =
    "You are a helpful assistant. If you can't access web search, say 'I cannot access web search'.";
/// Matched case-insensitively against the reply.
pub const REFUSAL_PHRASE: &str = "cannot access web search";

const PROBE_TEMPERATURE: f64 = 0.7;
const PROBE_MAX_TOKENS: i64 = 100;

/// Whether `model` appears to perform live web retrieval.
///
/// Returns `false` when the reply contains the refusal phrase or when the
/// call fails for any reason (including an unknown model). Never prompts; the
/// caller decides what to do with a negative answer.
pub async fn probe_web_search(provider: &dyn ModelProvider, model: &str) -> bool {
    let settings = GenerationSettings {
        system_prompt: Some(PROBE_SYSTEM_PROMPT.to_string()),
        temperature: PROBE_TEMPERATURE,
        max_tokens: Some(PROBE_MAX_TOKENS),
        stream: false,
    };

    match super::text::generate_text(provider, model, PROBE_PROMPT, &settings).await {
        Ok(response) => {
            let refused = response
                .text()
                .to_lowercase()
                .contains(REFUSAL_PHRASE);
            debug!(model, refused, "web search probe answered");
            !refused
        }
        Err(e) => {
            warn!(model, error = %e, "web search probe failed");
            false
        }
    }
}

//! Generation settings.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// System prompt used when the caller supplies none.
pub const DEFAULT_SYSTEM_PROMPT: &str = "Be precise and concise.";

/// Temperature used when the caller supplies none.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Settings controlling a single chat completion.
///
/// Out-of-range numbers are accepted here and clamped when the request is
/// built.
///
/// ```
/// use sonar::types::GenerationSettings;
///
/// let settings = GenerationSettings::builder()
///     .temperature(0.2)
///     .max_tokens(256)
///     .stream(true)
///     .build();
/// assert_eq!(settings.max_tokens, Some(256));
/// ```
#[derive(Debug, Clone, Builder, Serialize, Deserialize, PartialEq)]
pub struct GenerationSettings {
    /// Only used when the request is synthesized from a single prompt.
    pub system_prompt: Option<String>,
    #[builder(default = DEFAULT_TEMPERATURE)]
    pub temperature: f64,
    pub max_tokens: Option<i64>,
    #[builder(default)]
    pub stream: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            system_prompt: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            stream: false,
        }
    }
}

impl GenerationSettings {
    /// The same settings with streaming switched on or off.
    pub fn streaming(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}

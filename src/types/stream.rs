//! Streaming types.

use serde::{Deserialize, Serialize};

/// One unit produced while consuming an event-stream response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum StreamFragment {
    /// Incremental assistant text. Never empty.
    Delta(String),
    /// The server sent `[DONE]`; nothing follows.
    Done,
}

impl StreamFragment {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Delta(text) => Some(text.as_str()),
            Self::Done => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Final result after consuming a fragment stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamTextResult {
    /// All deltas, concatenated in arrival order.
    pub text: String,
    /// Number of deltas received.
    pub fragments: usize,
    /// Whether the `[DONE]` sentinel was seen. `false` means the body ended
    /// (or the consumer stopped) without one.
    pub completed: bool,
}

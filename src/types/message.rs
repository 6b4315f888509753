//! Message types for model communication.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use crate::error::SonarError;

/// A message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Conversation role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl TryFrom<&Value> for Message {
    type Error = SonarError;

    /// Validate an untyped `{"role": ..., "content": ...}` object.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let obj = value.as_object().ok_or_else(|| {
            SonarError::InvalidMessage(
                "each message must be an object with 'role' and 'content' fields".into(),
            )
        })?;

        let (Some(role), Some(content)) = (obj.get("role"), obj.get("content")) else {
            return Err(SonarError::InvalidMessage(
                "each message must have 'role' and 'content' fields".into(),
            ));
        };

        let role = role
            .as_str()
            .and_then(|r| r.parse::<Role>().ok())
            .ok_or_else(|| {
                SonarError::InvalidMessage(format!(
                    "invalid role {role}, must be one of: system, user, assistant"
                ))
            })?;

        let content = content
            .as_str()
            .ok_or_else(|| SonarError::InvalidMessage("message content must be text".into()))?;

        Ok(Message::new(role, content))
    }
}

/// Validate every entry of an untyped message list.
///
/// One bad entry rejects the whole batch; the error names its position.
pub fn validate_messages(raw: &[Value]) -> Result<Vec<Message>, SonarError> {
    raw.iter()
        .enumerate()
        .map(|(i, value)| {
            Message::try_from(value).map_err(|e| match e {
                SonarError::InvalidMessage(reason) => {
                    SonarError::InvalidMessage(format!("message {i}: {reason}"))
                }
                other => other,
            })
        })
        .collect()
}

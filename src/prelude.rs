//! Convenience re-exports for common use.

pub use crate::config::SonarConfig;
pub use crate::error::{Result, SonarError};
pub use crate::models::{ModelCategory, ModelDescriptor, ModelSelector};
pub use crate::provider::{CompletionClient, ModelProvider};
pub use crate::types::{
    ChatRequest, ChatResponse, GenerationSettings, Message, MessageInput, Role, StreamFragment,
    StreamTextResult,
};

//! Model provider trait and the Perplexity HTTP client.

pub mod http;
pub mod perplexity;
pub mod response;
pub mod sse;

pub use perplexity::CompletionClient;

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::SonarError;
use crate::types::{ChatRequest, ChatResponse, StreamFragment};

/// Boxed stream of fragments returned by [`ModelProvider::stream`].
pub type FragmentStream = BoxStream<'static, Result<StreamFragment, SonarError>>;

/// Something that can answer a validated [`ChatRequest`].
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name, for logs.
    fn provider_name(&self) -> &str;

    /// Send the request and decode a single JSON response.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, SonarError>;

    /// Send the request and decode the event-stream response lazily.
    ///
    /// Dropping the returned stream closes the connection.
    async fn stream(&self, request: &ChatRequest) -> Result<FragmentStream, SonarError>;
}

//! Shared test helpers and mock provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use sonar::error::SonarError;
use sonar::provider::{FragmentStream, ModelProvider};
use sonar::types::*;

/// A completion whose first choice says `text`.
pub fn response_with_text(text: &str) -> ChatResponse {
    serde_json::from_value(serde_json::json!({
        "id": "mock",
        "model": "sonar",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": text}}]
    }))
    .unwrap()
}

/// A mock provider that records requests and returns canned responses.
pub struct MockProvider {
    responses: Mutex<VecDeque<Result<ChatResponse, SonarError>>>,
    fragments: Mutex<Vec<StreamFragment>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fragments: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a text response.
    pub fn queue_response(&self, text: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(response_with_text(text)));
    }

    /// Queue a failure.
    pub fn queue_error(&self, error: SonarError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Set the fragments the next stream yields.
    pub fn set_fragments(&self, fragments: Vec<StreamFragment>) {
        *self.fragments.lock().unwrap() = fragments;
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, SonarError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(response_with_text("Mock response")))
    }

    async fn stream(&self, request: &ChatRequest) -> Result<FragmentStream, SonarError> {
        self.requests.lock().unwrap().push(request.clone());
        let fragments = std::mem::take(&mut *self.fragments.lock().unwrap());
        let stream = async_stream::stream! {
            for fragment in fragments {
                yield Ok(fragment);
            }
        };
        Ok(Box::pin(stream))
    }
}

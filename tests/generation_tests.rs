//! Tests for the generation layer using the mock provider.

mod common;

use common::MockProvider;
use pretty_assertions::assert_eq;
use serde_json::json;
use sonar::error::SonarError;
use sonar::generation::{self, collect_stream, probe_web_search};
use sonar::types::*;

#[tokio::test]
async fn generate_text_simple() {
    let provider = MockProvider::new();
    provider.queue_response("Hello from mock!");

    let response = generation::generate_text(&provider, "sonar", "Hi", &GenerationSettings::default())
        .await
        .unwrap();

    assert_eq!(response.text(), "Hello from mock!");
    let request = provider.last_request().unwrap();
    assert_eq!(request.model, "sonar");
    assert_eq!(
        request.messages,
        vec![Message::system("Be precise and concise."), Message::user("Hi")]
    );
    assert_eq!(request.temperature, 0.7);
    assert!(!request.stream);
}

#[tokio::test]
async fn invalid_model_never_reaches_provider() {
    let provider = MockProvider::new();

    let err = generation::generate_text(
        &provider,
        "not-a-real-model",
        "Hi",
        &GenerationSettings::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, SonarError::InvalidModel { .. }));
    assert!(err.to_string().contains("sonar-reasoning-pro"));
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn invalid_message_never_reaches_provider() {
    let provider = MockProvider::new();
    let raw = vec![
        json!({"role": "user", "content": "ok"}),
        json!({"role": "bogus", "content": "x"}),
    ];

    let err = generation::stream_text(&provider, "sonar", raw, &GenerationSettings::default())
        .await
        .err()
        .unwrap();

    assert!(matches!(err, SonarError::InvalidMessage(_)));
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn settings_are_clamped_before_sending() {
    let provider = MockProvider::new();
    let settings = GenerationSettings::builder()
        .temperature(-5.0)
        .max_tokens(0)
        .build();

    generation::generate_text(&provider, "sonar-pro", "Hi", &settings)
        .await
        .unwrap();

    let request = provider.last_request().unwrap();
    assert_eq!(request.temperature, 0.0);
    assert_eq!(request.max_tokens, Some(1));
}

#[tokio::test]
async fn generate_text_forces_non_streaming() {
    let provider = MockProvider::new();
    let settings = GenerationSettings::default().streaming(true);

    generation::generate_text(&provider, "sonar", "Hi", &settings)
        .await
        .unwrap();

    assert!(!provider.last_request().unwrap().stream);
}

#[tokio::test]
async fn conversation_is_sent_in_order() {
    let provider = MockProvider::new();
    let conversation = vec![
        Message::system("You are terse."),
        Message::user("Name a colour."),
        Message::assistant("Blue."),
        Message::user("Another."),
    ];

    generation::generate_text(
        &provider,
        "r1-1776",
        conversation.clone(),
        &GenerationSettings::default(),
    )
    .await
    .unwrap();

    assert_eq!(provider.last_request().unwrap().messages, conversation);
}

#[tokio::test]
async fn stream_text_collects() {
    let provider = MockProvider::new();
    provider.set_fragments(vec![
        StreamFragment::Delta("Streamed ".into()),
        StreamFragment::Delta("text".into()),
        StreamFragment::Done,
    ]);

    let stream = generation::stream_text(&provider, "sonar", "Stream this", &GenerationSettings::default())
        .await
        .unwrap();
    let result = collect_stream(stream).await.unwrap();

    assert_eq!(result.text, "Streamed text");
    assert_eq!(result.fragments, 2);
    assert!(result.completed);
    assert!(provider.last_request().unwrap().stream);
}

#[tokio::test]
async fn probe_true_when_model_answers() {
    let provider = MockProvider::new();
    provider.queue_response("It is 3:14 PM in New York right now.");

    assert!(probe_web_search(&provider, "sonar").await);

    let request = provider.last_request().unwrap();
    assert_eq!(request.max_tokens, Some(100));
    assert_eq!(request.temperature, 0.7);
    assert_eq!(request.messages.len(), 2);
    assert!(request.messages[0].content.contains("I cannot access web search"));
    assert!(request.messages[1].content.contains("current time in New York"));
}

#[tokio::test]
async fn probe_false_on_refusal_in_any_case() {
    let provider = MockProvider::new();
    provider.queue_response("Sorry, I CANNOT ACCESS WEB SEARCH from here.");

    assert!(!probe_web_search(&provider, "r1-1776").await);
}

#[tokio::test]
async fn probe_false_on_failure() {
    let provider = MockProvider::new();
    provider.queue_error(SonarError::api(500, "Internal Server Error"));

    assert!(!probe_web_search(&provider, "sonar").await);
}

#[tokio::test]
async fn probe_false_for_unknown_model() {
    let provider = MockProvider::new();

    assert!(!probe_web_search(&provider, "gpt-4o").await);
    assert!(provider.requests().is_empty());
}

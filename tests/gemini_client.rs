mod common;

use articlegen::domain::clients::TextGenerator;
use articlegen::error::GenerationError;
use articlegen::infrastructure::generation::GeminiClient;
use common::{GEMINI_KEY, GEMINI_MODEL, GENERATE_PATH, gemini_body};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(GEMINI_KEY, GEMINI_MODEL, Some(Duration::from_secs(2)))
        .unwrap()
        .with_base_url(format!("{}/v1beta", server.uri()))
}

#[tokio::test]
async fn test_generate_sends_prompt_as_user_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", GEMINI_KEY))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Write about cats" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("<h1>Cats</h1>")))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server)
        .generate_text("Write about cats")
        .await
        .unwrap();

    assert_eq!(text, "<h1>Cats</h1>");
}

#[tokio::test]
async fn test_generate_joins_all_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "<h1>Cats</h1>" }, { "text": "<p>Purr.</p>" }]
                }
            }]
        })))
        .mount(&server)
        .await;

    let text = client_for(&server).generate_text("prompt").await.unwrap();

    assert_eq!(text, "<h1>Cats</h1><p>Purr.</p>");
}

#[tokio::test]
async fn test_generate_maps_api_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate_text("prompt").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error: Gemini API error (400): INVALID_ARGUMENT: API key not valid. Please pass a valid API key."
    );
}

#[tokio::test]
async fn test_generate_without_candidates_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate_text("prompt").await.unwrap_err();

    assert!(matches!(err, GenerationError::Model { .. }));
}

#[tokio::test]
async fn test_transport_error_does_not_leak_api_key() {
    let client = GeminiClient::new(GEMINI_KEY, GEMINI_MODEL, Some(Duration::from_secs(2)))
        .unwrap()
        .with_base_url("http://127.0.0.1:1/v1beta");

    let err = client.generate_text("prompt").await.unwrap_err();

    assert!(matches!(err, GenerationError::Model { .. }));
    assert!(!err.to_string().contains(GEMINI_KEY));
}

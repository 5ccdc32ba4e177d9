//! End-to-end tests for the gateway over the full router.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use prompt_relay::adapters::ai::{MockFailure, MockGenerator};
use prompt_relay::adapters::http::{gateway_app, AppState};
use prompt_relay::config::ServerConfig;

fn app(generator: MockGenerator) -> Router {
    gateway_app(
        AppState::new(Arc::new(generator)),
        &ServerConfig::default(),
    )
}

async fn post(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app(MockGenerator::new()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "mock/mock-model-1");
}

#[tokio::test]
async fn summarize_returns_summary_field() {
    let generator = MockGenerator::new().with_response("A short summary.");
    let (status, body) = post(
        app(generator),
        "/summarize",
        json!({"text": "A very long article about nothing in particular."}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "A short summary.");
}

#[tokio::test]
async fn caption_returns_caption_field() {
    let generator = MockGenerator::new().with_response("A cat on a keyboard.");
    let (status, body) = post(
        app(generator),
        "/caption",
        json!({"image": "aGVsbG8=", "mimeType": "image/png"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["caption"], "A cat on a keyboard.");
}

#[tokio::test]
async fn translate_returns_translation_field() {
    let generator = MockGenerator::new().with_response("Hola");
    let (status, body) = post(
        app(generator),
        "/translate",
        json!({"text": "Hello", "language": "Spanish"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translation"], "Hola");
}

#[tokio::test]
async fn explain_code_returns_explanation_field() {
    let generator = MockGenerator::new().with_response("Prints a greeting.");
    let (status, body) = post(
        app(generator),
        "/explain-code",
        json!({"code": "println!(\"hi\");"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["explanation"], "Prints a greeting.");
}

#[tokio::test]
async fn visual_qa_returns_answer_field() {
    let generator = MockGenerator::new().with_response("Three apples.");
    let (status, body) = post(
        app(generator),
        "/visual-qa",
        json!({"image": "aGVsbG8=", "mimeType": "image/jpeg", "question": "How many apples?"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "Three apples.");
}

#[tokio::test]
async fn missing_text_is_bad_request() {
    let (status, body) = post(app(MockGenerator::new()), "/summarize", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No text provided.");
}

#[tokio::test]
async fn blank_text_is_bad_request() {
    let (status, body) = post(
        app(MockGenerator::new()),
        "/summarize",
        json!({"text": "   "}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No text provided.");
}

#[tokio::test]
async fn missing_image_is_bad_request() {
    let (status, body) = post(
        app(MockGenerator::new()),
        "/caption",
        json!({"mimeType": "image/png"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No image data provided.");
}

#[tokio::test]
async fn missing_language_is_bad_request() {
    let (status, body) = post(
        app(MockGenerator::new()),
        "/translate",
        json!({"text": "Hello"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No language provided.");
}

#[tokio::test]
async fn missing_code_is_bad_request() {
    let (status, body) = post(app(MockGenerator::new()), "/explain-code", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No code provided.");
}

#[tokio::test]
async fn missing_question_is_bad_request() {
    let (status, body) = post(
        app(MockGenerator::new()),
        "/visual-qa",
        json!({"image": "aGVsbG8=", "mimeType": "image/jpeg"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No question provided.");
}

#[tokio::test]
async fn validation_runs_before_the_model_is_called() {
    let generator = MockGenerator::new();
    let (status, _) = post(app(generator.clone()), "/summarize", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn upstream_failure_yields_generic_500() {
    let generator = MockGenerator::new()
        .with_failure(MockFailure::Unavailable("model overloaded".to_string()));
    let (status, body) = post(
        app(generator),
        "/translate",
        json!({"text": "Hello", "language": "Spanish"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to translate text.");
    // The upstream cause never reaches the client.
    assert!(!body.to_string().contains("overloaded"));
}

#[tokio::test]
async fn each_tool_has_its_own_failure_message() {
    for (path, payload, message) in [
        (
            "/summarize",
            json!({"text": "t"}),
            "Failed to summarize text.",
        ),
        (
            "/caption",
            json!({"image": "aGVsbG8=", "mimeType": "image/png"}),
            "Failed to generate caption.",
        ),
        (
            "/explain-code",
            json!({"code": "c"}),
            "Failed to explain code.",
        ),
        (
            "/visual-qa",
            json!({"image": "aGVsbG8=", "mimeType": "image/png", "question": "q"}),
            "Failed to get answer.",
        ),
    ] {
        let generator =
            MockGenerator::new().with_failure(MockFailure::Network("down".to_string()));
        let (status, body) = post(app(generator), path, payload).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], message, "wrong message for {path}");
    }
}

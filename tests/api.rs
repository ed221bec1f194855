use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use mood_lens::analyzer::TextAnalyzer;
use mood_lens::api::{router, AppState};
use mood_lens::registry::ModelAvailability;

fn app() -> Router {
    router(Arc::new(AppState {
        analyzer: TextAnalyzer::offline(),
        models: ModelAvailability::default(),
    }))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, payload: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_root_and_health() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");

    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_analyze_full_report() {
    let (status, body) = post(
        "/analyze",
        json!({"text": "I am so happy and grateful today. The sun is out. My friends are wonderful."}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["analysis_id"].is_string());
    assert!(body["summary"]["summary"].is_string());
    assert_eq!(body["mood"]["mood_category"], "positive");
    assert_eq!(body["motivation"]["mood_addressed"], body["mood"]["overall_mood"]);
    assert!(body["motivation"]["motivational_quote"].is_string());
}

#[tokio::test]
async fn test_analyze_without_mood_has_no_motivation() {
    let (status, body) = post("/analyze", json!({"text": "Plain words.", "include_mood": false})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["mood"].is_null());
    assert!(body["motivation"].is_null());
}

#[tokio::test]
async fn test_text_length_limits() {
    let (status, body) = post("/analyze", json!({"text": ""})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = post("/analyze", json!({"text": "a".repeat(10_001)})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post("/mood", json!({"text": "a".repeat(5_001)})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post("/mood", json!({"text": "a".repeat(5_000)})).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_whitespace_mood_is_unknown() {
    let (status, body) = post("/mood", json!({"text": "   "})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_mood"], "neutral");
    assert_eq!(body["mood_category"], "unknown");
    assert_eq!(body["confidence"], 0.0);
}

#[tokio::test]
async fn test_mood_stress_override() {
    let (_, body) = post(
        "/mood",
        json!({"text": "Work is amazing but I'm stressed, overwhelmed, exhausted and close to burnout."}),
    )
    .await;
    assert_eq!(body["overall_mood"], "stressed");
    assert_eq!(body["mood_category"], "negative");
    assert_eq!(body["indicators"]["stress_level"], 1.0);
}

#[tokio::test]
async fn test_summarize_validation_and_identity() {
    let text = "Short text. Only two sentences.";
    let (status, body) = post("/summarize", json!({"text": text, "num_sentences": 3})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], text);
    assert_eq!(body["method"], "extractive");

    let (status, _) = post("/summarize", json!({"text": text, "num_sentences": 11})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post("/summarize", json!({"text": text, "summary_type": "bullets"})).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_motivate_unknown_mood() {
    let (status, body) = post("/motivate", json!({"mood": "wistful"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mood_addressed"], "wistful");
    assert!(body["affirmations"].as_array().unwrap().len() <= 3);
}

#[tokio::test]
async fn test_static_content_endpoints() {
    let (status, body) = get("/daily-motivation").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["daily_quote"].is_string());
    assert!(body["message"].is_string());

    let (status, body) = get("/emergency-support").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["crisis_resources"].as_array().unwrap().is_empty());

    let (status, body) = get("/models/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["availability"]["sentiment"], false);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/analyze"].is_object());
}

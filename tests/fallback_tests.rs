//! Failure-path contract: any upstream problem (network error, non-2xx
//! status, empty candidate text) yields HTTP 200 with a localized offline
//! reply and the error marker set.

use sukoon_backend::config::Config;
use sukoon_backend::message::{ChatResponse, Language};
use sukoon_backend::routes::create_router;
use sukoon_backend::services::fallback::{UPSTREAM_UNAVAILABLE, offline_replies};
use sukoon_backend::state::{AppState, SharedState};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::{Json, Router};
use std::sync::Arc;
use tower::util::ServiceExt;

async fn spawn_upstream(status: StatusCode, body: serde_json::Value) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(move || {
        let body = body.clone();
        async move { (status, Json(body)) }
    });
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1beta/models/gemini-1.5-flash-latest:generateContent")
}

fn test_state(api_url: &str) -> SharedState {
    Arc::new(AppState::new(Config {
        bind_addr: "127.0.0.1:0".to_string(),
        gemini_api_key: "test-key".to_string(),
        gemini_api_url: api_url.to_string(),
        admin_key: None,
    }))
}

async fn send_chat(state: SharedState, body: &str) -> (StatusCode, ChatResponse) {
    let app = create_router().with_state(state);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body_bytes).unwrap())
}

#[tokio::test]
async fn test_upstream_503_yields_english_fallback() {
    let url = spawn_upstream(
        StatusCode::SERVICE_UNAVAILABLE,
        serde_json::json!({"error": "overloaded"}),
    )
    .await;
    let state = test_state(&url);

    let (status, chat_resp) = send_chat(
        state.clone(),
        r#"{"message": "I feel anxious", "language": "en"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(chat_resp.error.as_deref(), Some(UPSTREAM_UNAVAILABLE));
    assert!(offline_replies(Language::En).contains(&chat_resp.response.as_str()));

    let data = state.metrics.get_metrics().await;
    assert_eq!(data.reply_sources.get("fallback"), Some(&1));
}

#[tokio::test]
async fn test_upstream_500_yields_urdu_fallback_for_urdu_request() {
    let url = spawn_upstream(
        StatusCode::INTERNAL_SERVER_ERROR,
        serde_json::json!({"error": "boom"}),
    )
    .await;

    let (status, chat_resp) = send_chat(
        test_state(&url),
        r#"{"message": "مجھے مدد چاہیے", "language": "ur"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(chat_resp.error.as_deref(), Some(UPSTREAM_UNAVAILABLE));
    assert!(offline_replies(Language::Ur).contains(&chat_resp.response.as_str()));
    assert!(!offline_replies(Language::En).contains(&chat_resp.response.as_str()));
}

#[tokio::test]
async fn test_missing_candidate_text_falls_back() {
    let url = spawn_upstream(StatusCode::OK, serde_json::json!({})).await;

    let (status, chat_resp) =
        send_chat(test_state(&url), r#"{"message": "hello", "language": "en"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(chat_resp.error.as_deref(), Some(UPSTREAM_UNAVAILABLE));
    assert!(offline_replies(Language::En).contains(&chat_resp.response.as_str()));
}

#[tokio::test]
async fn test_blank_candidate_text_falls_back() {
    let url = spawn_upstream(
        StatusCode::OK,
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
        }),
    )
    .await;

    let (status, chat_resp) =
        send_chat(test_state(&url), r#"{"message": "hello", "language": "en"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(chat_resp.error.as_deref(), Some(UPSTREAM_UNAVAILABLE));
}

#[tokio::test]
async fn test_unreachable_upstream_falls_back() {
    // Grab an ephemeral port, then close it so connections are refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let url = format!("http://{addr}/v1beta/models/gemini-1.5-flash-latest:generateContent");

    let (status, chat_resp) =
        send_chat(test_state(&url), r#"{"message": "hello", "language": "en"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(chat_resp.error.as_deref(), Some(UPSTREAM_UNAVAILABLE));
    assert!(offline_replies(Language::En).contains(&chat_resp.response.as_str()));
}

//! End-to-end tests for the gateway routes, driven through the router
//! without a live socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use parking_lot::Mutex;
use tower::ServiceExt;
use zc_gateway::{GatewayConfig, GatewayService, SharedHistoryStore};
use zc_history::{HistoryStore, InMemoryHistoryStore};

fn test_router() -> (Router, SharedHistoryStore) {
    let history: SharedHistoryStore = Arc::new(Mutex::new(InMemoryHistoryStore::new()));
    let service = GatewayService::new(GatewayConfig::default(), Arc::clone(&history)).unwrap();
    (service.router(), history)
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn post_convert(input: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/convert")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(input.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn post_convert_returns_input_and_result() {
    let (router, _) = test_router();

    let (status, json) = send(
        &router,
        post_convert(serde_json::json!({"input_string": "dz_a_aazzaaa"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({"input": "dz_a_aazzaaa", "result": [28, 53, 1]})
    );
}

#[tokio::test]
async fn get_convert_accepts_query_parameter() {
    let (router, _) = test_router();

    let (status, json) = send(&router, get("/api/convert?input_string=aa")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({"input": "aa", "result": [1]}));
}

#[tokio::test]
async fn convert_trims_input_before_validation() {
    let (router, _) = test_router();

    let (status, json) = send(
        &router,
        post_convert(serde_json::json!({"input_string": "  aa  "})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["input"], "aa");
}

#[tokio::test]
async fn missing_input_is_a_400() {
    let (router, _) = test_router();

    for body in [
        serde_json::json!({}),
        serde_json::json!({"input_string": ""}),
        serde_json::json!({"input_string": "   "}),
    ] {
        let (status, json) = send(&router, post_convert(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({"detail": "Input string is required"}));
    }
}

#[tokio::test]
async fn oversized_input_is_a_400() {
    let (router, _) = test_router();

    let long = "a".repeat(1001);
    let (status, json) = send(
        &router,
        post_convert(serde_json::json!({"input_string": long})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({"detail": "Input string is too long"}));
}

#[tokio::test]
async fn non_ascii_input_is_a_400() {
    let (router, _) = test_router();

    let (status, json) = send(
        &router,
        post_convert(serde_json::json!({"input_string": "zürich"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        serde_json::json!({"detail": "Input string contains invalid characters"})
    );
}

#[tokio::test]
async fn rejected_input_is_not_recorded() {
    let (router, history) = test_router();

    let _ = send(&router, post_convert(serde_json::json!({"input_string": ""}))).await;
    assert!(history.lock().is_empty());
}

#[tokio::test]
async fn successful_conversions_accumulate_in_history() {
    let (router, _) = test_router();

    let _ = send(&router, post_convert(serde_json::json!({"input_string": "aa"}))).await;
    let _ = send(&router, get("/api/convert?input_string=z_a")).await;

    let (status, json) = send(&router, get("/api/history")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({"history": [
            {"input": "aa", "output": [1]},
            {"input": "z_a", "output": [1]},
        ]})
    );
}

#[tokio::test]
async fn empty_history_is_an_empty_list() {
    let (router, _) = test_router();

    let (status, json) = send(&router, get("/api/history")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({"history": []}));
}

#[tokio::test]
async fn health_check_responds() {
    let (router, _) = test_router();

    let (status, json) = send(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({"status": "ok"}));
}

//! HTTP API integration tests driven through the router without a socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::{build_router, ServerConfig, ServerState};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> Router {
    let config = ServerConfig {
        port: 0,
        max_body_size_kb: 16,
        ..Default::default()
    };
    build_router(Arc::new(ServerState::new(config)))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn valid_request() -> Value {
    json!({
        "recipientName": "Maya",
        "relationship": "my best friend",
        "occasion": "Birthday",
        "tone": "Warm",
        "messageIntent": "I hope this year is gentle with you",
        "senderName": "Jordan",
        "signature": "Kindly"
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = create_test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "carecards-server");
}

#[tokio::test]
async fn test_ready_endpoint() {
    let response = create_test_app()
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["limits"]["max_body_size_kb"], 16);
}

#[tokio::test]
async fn test_demo_generate_returns_poem() {
    let response = create_test_app()
        .oneshot(post_json("/api/demo-generate", valid_request()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let poem = body["poem"].as_str().expect("poem string");
    assert!(poem.contains("Maya"));
    assert!(poem.contains("On your birthday, I just want to say this clearly:"));
    assert!(poem.ends_with("— Kindly\nJordan"));
}

#[tokio::test]
async fn test_demo_generate_missing_fields() {
    let response = create_test_app()
        .oneshot(post_json(
            "/api/demo-generate",
            json!({ "recipientName": "Maya", "messageIntent": "   " }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "MISSING_FIELDS");
    assert_eq!(
        body["error"]["message"],
        "missing required fields: relationship, messageIntent"
    );
}

#[tokio::test]
async fn test_demo_generate_unknown_tone() {
    let mut request = valid_request();
    request["tone"] = json!("sarcastic");
    let response = create_test_app()
        .oneshot(post_json("/api/demo-generate", request))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_demo_generate_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/demo-generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = create_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_card_download() {
    let poem = "Dear Maya,\n\nHello.\n\n— Kindly\nJordan";
    let response = create_test_app()
        .oneshot(post_json(
            "/api/card",
            json!({
                "poem": poem,
                "recipientName": "Maya",
                "relationship": "my best friend",
                "occasion": "Birthday",
                "mode": "human_touch"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"care-card-maya.pdf\""
    );
    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_card_rejects_blank_poem() {
    let response = create_test_app()
        .oneshot(post_json(
            "/api/card",
            json!({ "poem": "  ", "recipientName": "Maya" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "EMPTY_POEM");
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let mut request = valid_request();
    request["meaning"] = json!("x".repeat(32 * 1024));
    let response = create_test_app()
        .oneshot(post_json("/api/demo-generate", request))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body_json(response).await["error"]["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let response = create_test_app()
        .oneshot(Request::get("/api/v1/process").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_request_id_is_echoed_or_minted() {
    let response = create_test_app()
        .oneshot(
            Request::get("/health")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");

    let response = create_test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let minted = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(minted).is_ok());
}

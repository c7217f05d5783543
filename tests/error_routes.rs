mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestClient;

#[tokio::test]
async fn health_reports_ok() {
    let client = TestClient::new().await;

    let (status, body) = client.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let client = TestClient::new().await;

    let (status, body) = client.get("/courses").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not Found" }));
}

#[tokio::test]
async fn wrong_method_keeps_405() {
    let client = TestClient::new().await;

    let (status, body) = client.delete("/lessons").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "error": "Method Not Allowed" }));
}

#[tokio::test]
async fn non_integer_id_is_bad_request() {
    let client = TestClient::new().await;

    let (status, body) = client.get("/lessons/first").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().expect("error should be a string");
    assert!(message.starts_with("Invalid path"), "got {message}");

    let (status, _) = client.post_empty("/teachers/1/teaches/x").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let client = TestClient::new().await;

    let (status, body) = client.post_raw("/lessons", "{\"title\":").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().expect("error should be a string");
    assert!(message.starts_with("Invalid payload"), "got {message}");
}

#[tokio::test]
async fn missing_body_is_bad_request() {
    let client = TestClient::new().await;

    let (status, _) = client.post_empty("/lessons").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

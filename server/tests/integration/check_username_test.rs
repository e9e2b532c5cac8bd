//! Integration Test: ユーザー名確認

use axum::http::StatusCode;
use serde_json::Value;

use crate::support::app::{json_request, TestApp};

#[tokio::test]
async fn test_check_username_false_then_true() {
    let app = TestApp::new().await;

    // Given: 未登録
    let (status, body) = app
        .send(json_request("GET", "/api/check-username?username=ash", None, None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Bool(false));

    // When: サインアップ
    app.signup("ash", "pikachu123").await;

    // Then: 登録済み、ボディは真偽値のみ
    let (status, body) = app
        .send(json_request("GET", "/api/check-username?username=ash", None, None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Bool(true));
}

#[tokio::test]
async fn test_check_username_requires_parameter() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(json_request("GET", "/api/check-username", None, None))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username is required");

    let (status, _) = app
        .send(json_request("GET", "/api/check-username?username=", None, None))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_username_needs_no_token() {
    let app = TestApp::new().await;

    let (status, _) = app
        .send(json_request(
            "GET",
            "/api/check-username?username=misty",
            Some("garbage"),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
}

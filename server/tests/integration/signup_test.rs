//! Integration Test: サインアップとログイン
//!
//! 入力検証、重複ユーザー名、認証失敗時のレスポンス

use axum::http::StatusCode;
use pokemon_collection::db::accounts;
use serde_json::json;

use crate::support::app::{json_request, TestApp};

#[tokio::test]
async fn test_signup_returns_created_account_without_hash() {
    let app = TestApp::new().await;

    let (status, body) = app.signup("ash", "pikachu123").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "ash");
    assert!(body["id"].as_str().is_some());
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_duplicate_signup_is_conflict_and_creates_no_row() {
    // Given: 登録済みのユーザー名
    let app = TestApp::new().await;
    let (status, _) = app.signup("misty", "starmie").await;
    assert_eq!(status, StatusCode::CREATED);

    // When: 同じユーザー名で再登録
    let (status, body) = app.signup("misty", "psyduck").await;

    // Then: 409、レコードは1件のまま
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Username already exists");
    assert_eq!(accounts::count(&app.pool).await.unwrap(), 1);

    // 元のパスワードで引き続きログインできる
    let (status, _) = app.login("misty", "starmie").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_signup_missing_fields_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app.signup("", "secret").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());

    let (status, _) = app.signup("brock", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(json_request(
            "POST",
            "/api/signup",
            None,
            Some(json!({ "password": "only-password" })),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(accounts::count(&app.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new().await;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/signup")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_identical() {
    let app = TestApp::new().await;
    app.signup("gary", "eevee-evolves").await;

    let (wrong_status, wrong_body) = app.login("gary", "wrong").await;
    let (unknown_status, unknown_body) = app.login("nobody", "wrong").await;

    assert_eq!(wrong_status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["error"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_returns_token_and_expiry() {
    let app = TestApp::new().await;
    app.signup("oak", "professor").await;

    let (status, body) = app.login("oak", "professor").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["expires_in"], 3600);
}

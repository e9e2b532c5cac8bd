//! Integration Test: 同一ユーザー名での同時サインアップ
//!
//! UNIQUE制約により1件だけが作成され、残りは409になる

use axum::http::StatusCode;
use pokemon_collection::db::accounts;
use serde_json::json;

use crate::support::app::{json_request, send, TestApp};

const CONCURRENT_REQUESTS: usize = 8;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signup_same_username_creates_one_account() {
    // Given: 未登録のユーザー名
    let app = TestApp::new().await;

    // When: 同じユーザー名でのサインアップを同時に発行
    let handles: Vec<_> = (0..CONCURRENT_REQUESTS)
        .map(|i| {
            let router = app.router.clone();
            let request = json_request(
                "POST",
                "/api/signup",
                None,
                Some(json!({ "username": "ash", "password": format!("pikachu{}", i) })),
            );
            tokio::spawn(async move { send(router, request).await.0 })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    // Then: 201は1件のみ、残りは409、レコードは1件
    let created = statuses
        .iter()
        .filter(|s| **s == StatusCode::CREATED)
        .count();
    let conflicts = statuses
        .iter()
        .filter(|s| **s == StatusCode::CONFLICT)
        .count();
    assert_eq!(created, 1, "statuses: {:?}", statuses);
    assert_eq!(conflicts, CONCURRENT_REQUESTS - 1);
    assert_eq!(accounts::count(&app.pool).await.unwrap(), 1);
}

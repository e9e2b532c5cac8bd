//! Integration Test: 所有者スコープ
//!
//! 他アカウントのポケモンは存在しないものとして扱われる

use axum::http::StatusCode;
use serde_json::json;

use crate::support::app::{json_request, TestApp};

#[tokio::test]
async fn test_delete_of_other_accounts_pokemon_is_not_found() {
    // Given: AとBがそれぞれログイン済み、Aがポケモンを所有
    let app = TestApp::new().await;
    let token_a = app.signup_and_login("ash", "pikachu123").await;
    let token_b = app.signup_and_login("gary", "eevee123").await;
    let id = app.store_pokemon(&token_a, "pikachu").await;

    // When: BがAのポケモンを削除
    let (status, body) = app
        .send(json_request(
            "DELETE",
            &format!("/api/myPokemons/{}", id),
            Some(&token_b),
            None,
        ))
        .await;

    // Then: 404、Aの一覧には残っている
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().is_some());
    assert_eq!(app.list_names(&token_a).await, vec!["pikachu"]);
    assert!(app.list_names(&token_b).await.is_empty());
}

#[tokio::test]
async fn test_lists_are_scoped_to_owner() {
    let app = TestApp::new().await;
    let token_a = app.signup_and_login("ash", "pikachu123").await;
    let token_b = app.signup_and_login("misty", "starmie").await;

    app.store_pokemon(&token_a, "pikachu").await;
    app.store_pokemon(&token_a, "charizard").await;
    app.store_pokemon(&token_b, "togepi").await;

    assert_eq!(app.list_names(&token_a).await, vec!["pikachu", "charizard"]);
    assert_eq!(app.list_names(&token_b).await, vec!["togepi"]);
}

#[tokio::test]
async fn test_store_requires_name() {
    let app = TestApp::new().await;
    let token = app.signup_and_login("brock", "onix").await;

    for body in [json!({}), json!({ "name": "" }), json!({ "name": "   " })] {
        let (status, response) = app
            .send(json_request("POST", "/api/myPokemons", Some(&token), Some(body)))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response["error"].as_str().is_some());
    }
    assert!(app.list_names(&token).await.is_empty());
}

#[tokio::test]
async fn test_delete_unknown_or_non_numeric_id_is_not_found() {
    let app = TestApp::new().await;
    let token = app.signup_and_login("ash", "pikachu123").await;

    for uri in ["/api/myPokemons/9999", "/api/myPokemons/abc"] {
        let (status, _) = app
            .send(json_request("DELETE", uri, Some(&token), None))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

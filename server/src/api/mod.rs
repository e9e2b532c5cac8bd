//! REST APIハンドラー
//!
//! アカウント認証と所有ポケモンのCRUD

pub mod auth;
pub mod error;
pub mod pokemons;

use crate::AppState;
use axum::{
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    // JWT認証が必要な保護されたルート
    let protected_routes = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/myPokemons",
            get(pokemons::list_my_pokemons).post(pokemons::create_pokemon),
        )
        .route("/api/myPokemons/:id", delete(pokemons::delete_pokemon))
        .layer(middleware::from_fn_with_state(
            state.jwt_secret.clone(),
            crate::auth::middleware::jwt_auth_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        // 認証エンドポイント（認証不要）
        .route("/api/check-username", get(auth::check_username))
        .route("/api/signup", post(auth::signup))
        .route("/api/login", post(auth::login))
        .merge(protected_routes)
        .with_state(state)
}

/// GET /health - 死活確認
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

//! 認証API
//!
//! ユーザー名確認、サインアップ、ログイン、認証情報確認

use crate::api::error::{ApiError, ApiResult};
use crate::auth::middleware::AuthenticatedAccount;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Extension, Json,
};
use pokemon_collection_common::protocol::{
    Credentials, LoginResponse, MeResponse, SignupResponse,
};
use serde::Deserialize;

/// ログイン失敗時の共通メッセージ（ユーザー名の有無を区別しない）
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// ユーザー名確認クエリ
#[derive(Debug, Deserialize)]
pub struct CheckUsernameQuery {
    /// 確認するユーザー名
    #[serde(default)]
    pub username: Option<String>,
}

/// GET /api/check-username?username=X - ユーザー名の登録有無
///
/// # Returns
/// * `200 OK` - true（登録済み）/ false（未登録）
/// * `400 Bad Request` - usernameパラメータなし
pub async fn check_username(
    State(app_state): State<AppState>,
    Query(query): Query<CheckUsernameQuery>,
) -> ApiResult<Json<bool>> {
    let username = query
        .username
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Username is required".to_string()))?;

    let exists = crate::db::accounts::exists(&app_state.db_pool, &username).await?;
    Ok(Json(exists))
}

/// POST /api/signup - アカウント作成
///
/// # Returns
/// * `201 Created` - 作成されたアカウント
/// * `400 Bad Request` - ユーザー名またはパスワードなし
/// * `409 Conflict` - ユーザー名重複
/// * `500 Internal Server Error` - サーバーエラー
pub async fn signup(
    State(app_state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SignupResponse>)> {
    let Json(request) = payload?;
    validate_credentials(&request)?;

    // パスワードをハッシュ化してから作成
    let password_hash = app_state.password_hasher.hash(&request.password).await?;
    let account =
        crate::db::accounts::create(&app_state.db_pool, &request.username, &password_hash)
            .await?;

    tracing::info!(account_id = %account.id, "Account created: username={}", account.username);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            id: account.id,
            username: account.username,
        }),
    ))
}

/// POST /api/login - ログイン
///
/// ユーザー名とパスワードで認証し、JWTトークンを発行
///
/// # Returns
/// * `200 OK` - ログイン成功（JWT token）
/// * `400 Bad Request` - 入力不足または認証失敗
/// * `500 Internal Server Error` - サーバーエラー
pub async fn login(
    State(app_state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;
    validate_credentials(&request)?;

    let account =
        crate::db::accounts::find_by_username(&app_state.db_pool, &request.username).await?;

    // 未登録ユーザーでもbcryptを実行し、応答時間で存在を判別させない
    let Some(account) = account else {
        app_state
            .password_hasher
            .verify_unknown(&request.password)
            .await?;
        tracing::debug!("Login rejected: unknown username");
        return Err(ApiError::Validation(INVALID_CREDENTIALS.to_string()));
    };

    let is_valid = app_state
        .password_hasher
        .verify(&request.password, &account.password_hash)
        .await?;

    if !is_valid {
        tracing::debug!(account_id = %account.id, "Login rejected: password mismatch");
        return Err(ApiError::Validation(INVALID_CREDENTIALS.to_string()));
    }

    let token = crate::auth::jwt::create_jwt(
        account.id,
        &account.username,
        &app_state.jwt_secret,
        app_state.jwt_ttl,
    )?;

    tracing::info!(account_id = %account.id, "Login succeeded");

    Ok(Json(LoginResponse {
        token,
        expires_in: app_state.jwt_ttl.num_seconds(),
    }))
}

/// GET /api/auth/me - 認証情報確認
///
/// # Returns
/// * `200 OK` - アカウント情報
/// * `404 Not Found` - アカウントが見つからない
pub async fn me(
    Extension(account): Extension<AuthenticatedAccount>,
    State(app_state): State<AppState>,
) -> ApiResult<Json<MeResponse>> {
    let account = crate::db::accounts::find_by_id(&app_state.db_pool, account.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Account not found".to_string()))?;

    Ok(Json(MeResponse {
        id: account.id,
        username: account.username,
    }))
}

fn validate_credentials(credentials: &Credentials) -> ApiResult<()> {
    if credentials.username.trim().is_empty() || credentials.password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".to_string(),
        ));
    }
    Ok(())
}

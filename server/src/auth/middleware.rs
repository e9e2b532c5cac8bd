// 認証ミドルウェア実装

use crate::api::error::ApiError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// 認証済みアカウント
///
/// ミドルウェアがリクエストの拡張データに格納する（リクエスト単位）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    /// アカウントID
    pub id: Uuid,
    /// ユーザー名
    pub username: String,
}

/// 無効なトークンに対する共通メッセージ
const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// JWT認証ミドルウェア
///
/// Authorizationヘッダーから "Bearer {token}" を抽出してJWT検証を行う
///
/// # Arguments
/// * `State(jwt_secret)` - JWT署名検証用のシークレットキー
/// * `request` - HTTPリクエスト
/// * `next` - 次のミドルウェア/ハンドラー
///
/// # Returns
/// * `Ok(Response)` - 認証成功、requestにAuthenticatedAccountを追加
/// * `Err(ApiError)` - トークンなしは401、無効なトークンは403
pub async fn jwt_auth_middleware(
    State(jwt_secret): State<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&request)
        .ok_or_else(|| ApiError::Unauthenticated("Missing bearer token".to_string()))?;

    // 失敗理由はログにのみ残し、レスポンスは同一にする
    let claims = crate::auth::jwt::verify_jwt(token, &jwt_secret).map_err(|e| {
        tracing::warn!(reason = %e, "JWT verification failed");
        ApiError::Forbidden(INVALID_TOKEN_MESSAGE.to_string())
    })?;

    let id = claims.sub.parse::<Uuid>().map_err(|e| {
        tracing::warn!("JWT subject is not a valid account id: {}", e);
        ApiError::Forbidden(INVALID_TOKEN_MESSAGE.to_string())
    })?;

    request.extensions_mut().insert(AuthenticatedAccount {
        id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// "Bearer {token}" からトークンを取り出す（スキーム名は大文字小文字を区別しない）
fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| {
            let (scheme, token) = value.trim_start().split_once(' ')?;
            scheme.eq_ignore_ascii_case("bearer").then_some(token)
        })
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

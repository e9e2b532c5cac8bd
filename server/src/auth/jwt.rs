// JWT生成と検証（jsonwebtoken実装）

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use pokemon_collection_common::auth::Claims;
use pokemon_collection_common::error::{ServerError, ServerResult};
use thiserror::Error;
use uuid::Uuid;

/// トークン検証の失敗理由
///
/// 外部にはすべて同じ認可エラーとして返し、区別はログにのみ残す
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// JWTとして解釈できない
    #[error("malformed token")]
    Malformed,
    /// 署名が一致しない
    #[error("invalid signature")]
    SignatureInvalid,
    /// 有効期限切れ
    #[error("token expired")]
    Expired,
}

/// JWTトークンを生成
///
/// # Arguments
/// * `account_id` - アカウントID
/// * `username` - ユーザー名
/// * `secret` - JWTシークレットキー
/// * `ttl` - 有効期間
///
/// # Returns
/// * `Ok(String)` - JWTトークン（3つのドット区切り部分）
/// * `Err(ServerError)` - 生成失敗
pub fn create_jwt(
    account_id: Uuid,
    username: &str,
    secret: &str,
    ttl: Duration,
) -> ServerResult<String> {
    let issued_at = Utc::now();
    let expiration = issued_at
        .checked_add_signed(ttl)
        .ok_or_else(|| ServerError::Jwt("Failed to calculate expiration time".to_string()))?;

    let claims = Claims {
        sub: account_id.to_string(),
        username: username.to_string(),
        iat: issued_at.timestamp().max(0) as usize,
        exp: expiration.timestamp().max(0) as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ServerError::Jwt(format!("Failed to create JWT: {}", e)))
}

/// JWTトークンを現在時刻で検証
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, TokenError> {
    verify_jwt_at(token, secret, Utc::now())
}

/// JWTトークンを指定時刻で検証
///
/// 有効期限は発行時ではなく検証時に判定する（`now > exp` で期限切れ）。
/// `exp` はJWTのNumericDate（秒単位）なので、判定も秒単位で行う。
/// `exp` と同じ秒の間は有効で、次の秒から期限切れになる
///
/// # Arguments
/// * `token` - 検証するJWTトークン
/// * `secret` - JWTシークレットキー
/// * `now` - 判定に使う時刻
///
/// # Returns
/// * `Ok(Claims)` - 検証済みクレーム
/// * `Err(TokenError)` - 形式不正、署名不一致、期限切れ
pub fn verify_jwt_at(token: &str, secret: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // 期限はleewayなしで自前判定する
    validation.validate_exp = false;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    })?;

    if now.timestamp() > claims.exp as i64 {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

//! 認証関連のデータモデル

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// アカウント
///
/// `password_hash` を外部へ出さないため `Serialize` は実装しない
#[derive(Debug, Clone)]
pub struct Account {
    /// アカウントID
    pub id: Uuid,
    /// ユーザー名（一意）
    pub username: String,
    /// bcryptハッシュ
    pub password_hash: String,
    /// 作成日時
    pub created_at: DateTime<Utc>,
}

/// JWTクレーム
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,      // アカウントID
    pub username: String, // ユーザー名
    pub iat: usize,       // 発行日時（Unix timestamp）
    pub exp: usize,       // 有効期限（Unix timestamp）
}

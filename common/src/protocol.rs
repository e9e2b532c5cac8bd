//! HTTP APIのリクエスト/レスポンス定義
//!
//! 欠落したフィールドは空文字列として受け取り、サーバー側で400として検証する

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// サインアップ/ログインのリクエスト
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// ユーザー名
    #[serde(default)]
    pub username: String,
    /// パスワード
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// 新しい認証情報を作成
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// サインアップのレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    /// 作成されたアカウントID
    pub id: Uuid,
    /// ユーザー名
    pub username: String,
}

/// ログインのレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// JWTトークン
    pub token: String,
    /// トークン有効期限（秒）
    pub expires_in: i64,
}

/// 認証情報確認のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    /// アカウントID
    pub id: Uuid,
    /// ユーザー名
    pub username: String,
}

/// ポケモン登録リクエスト
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPokemon {
    /// ポケモン名
    #[serde(default)]
    pub name: String,
}

/// ポケモン登録レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPokemon {
    /// レコードID
    pub id: i64,
    /// ポケモン名
    pub name: String,
}

/// 削除レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// メッセージ
    pub message: String,
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// エラーメッセージ
    pub error: String,
}

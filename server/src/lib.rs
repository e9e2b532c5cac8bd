//! Pokemon Collection Server
//!
//! アカウント認証付きの個人用ポケモンコレクションAPI

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// 認証・認可機能
pub mod auth;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// データベースアクセス
pub mod db;

/// JWT秘密鍵管理
pub mod jwt_secret;

/// ロギング初期化ユーティリティ
pub mod logging;

/// アプリケーション状態
///
/// 起動時に一度だけ構築し、以降は読み取り専用でリクエスト間に共有する
#[derive(Clone)]
pub struct AppState {
    /// データベース接続プール
    pub db_pool: sqlx::SqlitePool,
    /// JWT秘密鍵
    pub jwt_secret: String,
    /// JWT有効期間
    pub jwt_ttl: chrono::Duration,
    /// パスワードハッシャー
    pub password_hasher: auth::password::PasswordHasher,
}

//! データベースアクセス層
//!
//! SQLite（sqlx）によるアカウントとコレクションの永続化

/// アカウント管理
pub mod accounts;

/// 所有ポケモン管理
pub mod pokemons;

/// データベース初期化とマイグレーション
pub mod migrations;

//! Pokemon Collection Common Library
//!
//! サーバーとクライアントで共有する型定義、プロトコル、設定、エラー型を提供

#![warn(missing_docs)]

/// 認証関連のデータモデル
pub mod auth;

/// コレクションの型定義
pub mod types;

/// HTTP APIのリクエスト/レスポンス定義
pub mod protocol;

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;

//! 設定管理
//!
//! ServerConfig, ClientConfig等の設定構造体

use serde::{Deserialize, Serialize};

/// JWT有効期間のデフォルト（24時間）
pub const DEFAULT_JWT_TTL_SECS: i64 = 86400;

/// bcryptコストのデフォルト
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// データベースURLのデフォルト（カレントディレクトリのファイル）
///
/// サーバーは環境変数未設定時、データディレクトリ配下のファイルで上書きする
pub const DEFAULT_DATABASE_URL: &str = "sqlite:collection.db";

/// サーバー設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// データベースURL (デフォルト: [`DEFAULT_DATABASE_URL`])
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// JWT有効期間（秒）(デフォルト: 86400)
    #[serde(default = "default_jwt_ttl")]
    pub jwt_ttl_secs: i64,

    /// bcryptコスト (デフォルト: 12)
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

fn default_jwt_ttl() -> i64 {
    DEFAULT_JWT_TTL_SECS
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
            jwt_ttl_secs: default_jwt_ttl(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl ServerConfig {
    /// バインドアドレスを返す
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// クライアント設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// コレクションAPIのURL (デフォルト: "http://localhost:3000")
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// PokeAPIのURL (デフォルト: "https://pokeapi.co/api/v2")
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// リクエストタイムアウト（秒）(デフォルト: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_server_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_catalog_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            catalog_url: default_catalog_url(),
            timeout_secs: default_timeout(),
        }
    }
}

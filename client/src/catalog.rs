//! PokeAPIカタログへの問い合わせ
//!
//! レスポンスは加工せずJSONのまま返す

use crate::{build_http_client, decode_response};
use pokemon_collection_common::{
    config::ClientConfig,
    error::{ClientError, ClientResult},
};
use serde_json::Value;
use tracing::debug;

/// PokeAPIクライアント
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl PokeApiClient {
    /// 設定からクライアントを作成
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            base_url: config.catalog_url.trim_end_matches('/').to_string(),
            http_client: build_http_client(config)?,
        })
    }

    /// カタログのベースURL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 名前でポケモンを取得（`GET {base}/pokemon/{name}`）
    pub async fn get_pokemon_by_name(&self, name: &str) -> ClientResult<Value> {
        let name = name.trim().to_lowercase();
        self.get_pokemon_by_url(&format!("{}/pokemon/{}", self.base_url, name))
            .await
    }

    /// カタログが返した詳細URLからポケモンを取得
    pub async fn get_pokemon_by_url(&self, url: &str) -> ClientResult<Value> {
        debug!("Fetching pokemon from catalog: {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Http(format!("Failed to fetch pokemon: {}", e)))?;

        decode_response(response).await
    }
}

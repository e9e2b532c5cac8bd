//! Pokemon Collection Client
//!
//! PokeAPIカタログとコレクションAPIへのHTTPクライアント

#![warn(missing_docs)]

/// PokeAPIカタログクライアント
pub mod catalog;

/// コレクションAPIクライアント
pub mod collection;

pub use catalog::PokeApiClient;
pub use collection::CollectionClient;

use pokemon_collection_common::{
    config::ClientConfig,
    error::{ClientError, ClientResult},
    protocol::ErrorResponse,
};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// 設定のタイムアウトでHTTPクライアントを作成
pub(crate) fn build_http_client(config: &ClientConfig) -> ClientResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| ClientError::Http(format!("Failed to create HTTP client: {}", e)))
}

/// 成功レスポンスをJSONとしてデコードし、失敗時はエラーボディのメッセージを返す
pub(crate) async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

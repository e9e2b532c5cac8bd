//! コレクションAPIクライアント
//!
//! ログインで得たトークンを保持し、以降のリクエストに付与する

use crate::{build_http_client, decode_response};
use pokemon_collection_common::{
    config::ClientConfig,
    error::{ClientError, ClientResult},
    protocol::{CreatedPokemon, Credentials, LoginResponse, MessageResponse, NewPokemon, SignupResponse},
    types::OwnedPokemon,
};
use tracing::{debug, info};

/// コレクションAPIクライアント
#[derive(Debug, Clone)]
pub struct CollectionClient {
    base_url: String,
    token: Option<String>,
    http_client: reqwest::Client,
}

impl CollectionClient {
    /// 設定からクライアントを作成（未ログイン状態）
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            base_url: config.server_url.trim_end_matches('/').to_string(),
            token: None,
            http_client: build_http_client(config)?,
        })
    }

    /// 既存のトークンを設定
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// 保持しているトークン
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// ユーザー名が登録済みか確認
    pub async fn check_username(&self, username: &str) -> ClientResult<bool> {
        let response = self
            .http_client
            .get(format!("{}/api/check-username", self.base_url))
            .query(&[("username", username)])
            .send()
            .await
            .map_err(|e| ClientError::Http(format!("Failed to check username: {}", e)))?;

        decode_response(response).await
    }

    /// アカウントを作成
    pub async fn signup(&self, username: &str, password: &str) -> ClientResult<SignupResponse> {
        let response = self
            .http_client
            .post(format!("{}/api/signup", self.base_url))
            .json(&Credentials::new(username, password))
            .send()
            .await
            .map_err(|e| ClientError::Http(format!("Failed to sign up: {}", e)))?;

        decode_response(response).await
    }

    /// ログインしてトークンを保存
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let response = self
            .http_client
            .post(format!("{}/api/login", self.base_url))
            .json(&Credentials::new(username, password))
            .send()
            .await
            .map_err(|e| ClientError::Http(format!("Failed to log in: {}", e)))?;

        let login: LoginResponse = decode_response(response).await?;
        self.token = Some(login.token.clone());
        info!("Logged in to collection API as {}", username);

        Ok(login)
    }

    /// 所有ポケモン一覧を取得
    pub async fn list_my_pokemons(&self) -> ClientResult<Vec<OwnedPokemon>> {
        let token = self.require_token()?;
        let response = self
            .http_client
            .get(format!("{}/api/myPokemons", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ClientError::Http(format!("Failed to list pokemons: {}", e)))?;

        decode_response(response).await
    }

    /// ポケモンを登録
    pub async fn store_pokemon(&self, name: &str) -> ClientResult<CreatedPokemon> {
        let token = self.require_token()?;
        let response = self
            .http_client
            .post(format!("{}/api/myPokemons", self.base_url))
            .bearer_auth(token)
            .json(&NewPokemon {
                name: name.to_string(),
            })
            .send()
            .await
            .map_err(|e| ClientError::Http(format!("Failed to store pokemon: {}", e)))?;

        let created: CreatedPokemon = decode_response(response).await?;
        debug!("Stored pokemon {} as id {}", created.name, created.id);
        Ok(created)
    }

    /// ポケモンを削除
    pub async fn delete_pokemon(&self, id: i64) -> ClientResult<MessageResponse> {
        let token = self.require_token()?;
        let response = self
            .http_client
            .delete(format!("{}/api/myPokemons/{}", self.base_url, id))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ClientError::Http(format!("Failed to delete pokemon: {}", e)))?;

        decode_response(response).await
    }

    fn require_token(&self) -> ClientResult<&str> {
        self.token.as_deref().ok_or(ClientError::NotLoggedIn)
    }
}

// パスワードハッシュ化と検証（bcrypt実装）

use bcrypt::{hash, verify};
use pokemon_collection_common::error::{ServerError, ServerResult};

/// bcryptが受け付ける最小コスト
pub const MIN_HASH_COST: u32 = 4;

/// パスワードをbcryptでハッシュ化
///
/// ハッシュ文字列自体にコストとソルトが含まれるため、後でコストを変更しても
/// 既存ハッシュの検証は引き続き可能
///
/// # Arguments
/// * `password` - ハッシュ化するパスワード
/// * `cost` - bcryptコスト
///
/// # Returns
/// * `Ok(String)` - bcryptハッシュ文字列（$2b$で始まる）
/// * `Err(ServerError)` - ハッシュ化失敗
pub fn hash_password(password: &str, cost: u32) -> ServerResult<String> {
    hash(password, cost)
        .map_err(|e| ServerError::PasswordHash(format!("Failed to hash password: {}", e)))
}

/// パスワードを検証
///
/// # Arguments
/// * `password` - 検証する平文パスワード
/// * `hash` - bcryptハッシュ文字列
///
/// # Returns
/// * `Ok(true)` - パスワード一致
/// * `Ok(false)` - パスワード不一致
/// * `Err(ServerError)` - 検証失敗（ハッシュ形式不正など）
pub fn verify_password(password: &str, hash: &str) -> ServerResult<bool> {
    verify(password, hash)
        .map_err(|e| ServerError::PasswordHash(format!("Failed to verify password: {}", e)))
}

/// リクエスト処理用のパスワードハッシャー
///
/// bcryptはCPUを占有するため、ブロッキングスレッドプールで実行する
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// 新しいハッシャーを作成（コストは最小値に切り上げ）
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.max(MIN_HASH_COST),
        }
    }

    /// 設定されたコスト
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// パスワードをハッシュ化
    pub async fn hash(&self, password: &str) -> ServerResult<String> {
        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| ServerError::Internal(format!("Password hashing task failed: {}", e)))?
    }

    /// パスワードを検証
    pub async fn verify(&self, password: &str, hash: &str) -> ServerResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| ServerError::Internal(format!("Password verification task failed: {}", e)))?
    }

    /// 存在しないアカウントに対する検証
    ///
    /// 実アカウントの検証と同じコストのbcrypt計算を行い、常に不一致を返す
    pub async fn verify_unknown(&self, password: &str) -> ServerResult<bool> {
        self.hash(password).await.map(|_| false)
    }
}

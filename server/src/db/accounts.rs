// アカウントCRUD操作

use chrono::{DateTime, Utc};
use pokemon_collection_common::auth::Account;
use pokemon_collection_common::error::{CommonError, ServerError, ServerResult};
use sqlx::SqlitePool;
use uuid::Uuid;

/// アカウントを作成
///
/// ユーザー名の一意性はUNIQUE制約で保証するため、同名の同時サインアップは
/// 片方だけが成功する
///
/// # Arguments
/// * `pool` - データベース接続プール
/// * `username` - ユーザー名
/// * `password_hash` - bcryptハッシュ化されたパスワード
///
/// # Returns
/// * `Ok(Account)` - 作成されたアカウント
/// * `Err(ServerError::DuplicateUsername)` - ユーザー名重複
/// * `Err(ServerError)` - 作成失敗
pub async fn create(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> ServerResult<Account> {
    let id = Uuid::new_v4();
    let created_at = Utc::now();

    sqlx::query(
        "INSERT INTO accounts (id, username, password_hash, created_at)
         VALUES (?, ?, ?, ?)",
    )
    .bind(id.to_string())
    .bind(username)
    .bind(password_hash)
    .bind(created_at.to_rfc3339())
    .execute(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            ServerError::DuplicateUsername(username.to_string())
        }
        other => ServerError::Database(format!("Failed to create account: {}", other)),
    })?;

    Ok(Account {
        id,
        username: username.to_string(),
        password_hash: password_hash.to_string(),
        created_at,
    })
}

/// ユーザー名でアカウントを検索
///
/// # Returns
/// * `Ok(Some(Account))` - アカウントが見つかった
/// * `Ok(None)` - アカウントが見つからなかった
/// * `Err(ServerError)` - 検索失敗
pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> ServerResult<Option<Account>> {
    let row = sqlx::query_as::<_, AccountRow>(
        "SELECT id, username, password_hash, created_at FROM accounts WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerError::Database(format!("Failed to find account: {}", e)))?;

    row.map(AccountRow::into_account).transpose()
}

/// IDでアカウントを検索
pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> ServerResult<Option<Account>> {
    let row = sqlx::query_as::<_, AccountRow>(
        "SELECT id, username, password_hash, created_at FROM accounts WHERE id = ?",
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerError::Database(format!("Failed to find account: {}", e)))?;

    row.map(AccountRow::into_account).transpose()
}

/// ユーザー名が登録済みか確認
///
/// パスワードハッシュは読み出さない
pub async fn exists(pool: &SqlitePool, username: &str) -> ServerResult<bool> {
    let found: i64 =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE username = ?)")
            .bind(username)
            .fetch_one(pool)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to check username: {}", e)))?;

    Ok(found != 0)
}

/// 登録アカウント数
pub async fn count(pool: &SqlitePool) -> ServerResult<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
        .fetch_one(pool)
        .await
        .map_err(|e| ServerError::Database(format!("Failed to count accounts: {}", e)))
}

// SQLiteからの行取得用の内部型
#[derive(sqlx::FromRow)]
struct AccountRow {
    id: String,
    username: String,
    password_hash: String,
    created_at: String,
}

impl AccountRow {
    fn into_account(self) -> ServerResult<Account> {
        let id = Uuid::parse_str(&self.id).map_err(CommonError::from)?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| ServerError::Database(format!("Invalid created_at: {}", e)))?
            .with_timezone(&Utc);

        Ok(Account {
            id,
            username: self.username,
            password_hash: self.password_hash,
            created_at,
        })
    }
}

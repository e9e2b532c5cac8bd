// 所有ポケモンの操作
//
// すべてのクエリは owner_id で絞り込む。他アカウントのレコードは存在しないものとして扱う

use chrono::{DateTime, Utc};
use pokemon_collection_common::error::{CommonError, ServerError, ServerResult};
use pokemon_collection_common::types::OwnedPokemon;
use sqlx::SqlitePool;
use uuid::Uuid;

/// 削除結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 削除した
    Deleted,
    /// 存在しない、または所有者が異なる
    NotFound,
}

/// アカウントが所有するポケモン一覧を取得（ID昇順）
pub async fn list_for(pool: &SqlitePool, owner_id: Uuid) -> ServerResult<Vec<OwnedPokemon>> {
    let rows = sqlx::query_as::<_, PokemonRow>(
        "SELECT id, name, owner_id, created_at FROM owned_pokemons WHERE owner_id = ? ORDER BY id",
    )
    .bind(owner_id.to_string())
    .fetch_all(pool)
    .await
    .map_err(|e| ServerError::Database(format!("Failed to list pokemons: {}", e)))?;

    rows.into_iter().map(PokemonRow::into_pokemon).collect()
}

/// ポケモンを登録
///
/// # Arguments
/// * `pool` - データベース接続プール
/// * `owner_id` - 所有者のアカウントID
/// * `name` - ポケモン名（前後の空白は除去）
///
/// # Returns
/// * `Ok(OwnedPokemon)` - 登録されたレコード
/// * `Err(ServerError::Validation)` - 名前が空
/// * `Err(ServerError)` - 登録失敗
pub async fn insert(
    pool: &SqlitePool,
    owner_id: Uuid,
    name: &str,
) -> ServerResult<OwnedPokemon> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServerError::Validation("Name is required".to_string()));
    }

    let created_at = Utc::now();
    let result = sqlx::query(
        "INSERT INTO owned_pokemons (name, owner_id, created_at) VALUES (?, ?, ?)",
    )
    .bind(name)
    .bind(owner_id.to_string())
    .bind(created_at.to_rfc3339())
    .execute(pool)
    .await
    .map_err(|e| ServerError::Database(format!("Failed to insert pokemon: {}", e)))?;

    Ok(OwnedPokemon {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        owner_id,
        created_at,
    })
}

/// 所有者が一致する場合のみポケモンを削除
///
/// IDと所有者の照合と削除を1文で行うため、同じIDへの同時削除は1件だけが
/// `Deleted` になる
pub async fn delete_owned(
    pool: &SqlitePool,
    owner_id: Uuid,
    id: i64,
) -> ServerResult<DeleteOutcome> {
    let result = sqlx::query("DELETE FROM owned_pokemons WHERE id = ? AND owner_id = ?")
        .bind(id)
        .bind(owner_id.to_string())
        .execute(pool)
        .await
        .map_err(|e| ServerError::Database(format!("Failed to delete pokemon: {}", e)))?;

    if result.rows_affected() == 0 {
        Ok(DeleteOutcome::NotFound)
    } else {
        Ok(DeleteOutcome::Deleted)
    }
}

// SQLiteからの行取得用の内部型
#[derive(sqlx::FromRow)]
struct PokemonRow {
    id: i64,
    name: String,
    owner_id: String,
    created_at: String,
}

impl PokemonRow {
    fn into_pokemon(self) -> ServerResult<OwnedPokemon> {
        let owner_id = Uuid::parse_str(&self.owner_id).map_err(CommonError::from)?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| ServerError::Database(format!("Invalid created_at: {}", e)))?
            .with_timezone(&Utc);

        Ok(OwnedPokemon {
            id: self.id,
            name: self.name,
            owner_id,
            created_at,
        })
    }
}

//! コレクションの型定義

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// アカウントが所有するポケモン
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedPokemon {
    /// レコードID
    pub id: i64,
    /// ポケモン名
    pub name: String,
    /// 所有者のアカウントID
    pub owner_id: Uuid,
    /// 登録日時
    pub created_at: DateTime<Utc>,
}

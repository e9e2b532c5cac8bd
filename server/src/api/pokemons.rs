//! 所有ポケモンAPI
//!
//! 認証済みアカウントのコレクションのみを操作する

use crate::api::error::{ApiError, ApiResult};
use crate::auth::middleware::AuthenticatedAccount;
use crate::db::pokemons::{self, DeleteOutcome};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use pokemon_collection_common::protocol::{CreatedPokemon, MessageResponse, NewPokemon};
use pokemon_collection_common::types::OwnedPokemon;

/// GET /api/myPokemons - 所有ポケモン一覧
pub async fn list_my_pokemons(
    Extension(account): Extension<AuthenticatedAccount>,
    State(app_state): State<AppState>,
) -> ApiResult<Json<Vec<OwnedPokemon>>> {
    let pokemons = pokemons::list_for(&app_state.db_pool, account.id).await?;
    Ok(Json(pokemons))
}

/// POST /api/myPokemons - ポケモン登録
///
/// # Returns
/// * `201 Created` - 登録されたポケモン（id, name）
/// * `400 Bad Request` - 名前なし
pub async fn create_pokemon(
    Extension(account): Extension<AuthenticatedAccount>,
    State(app_state): State<AppState>,
    payload: Result<Json<NewPokemon>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedPokemon>)> {
    let Json(request) = payload?;
    let pokemon = pokemons::insert(&app_state.db_pool, account.id, &request.name).await?;

    tracing::info!(
        account_id = %account.id,
        pokemon_id = pokemon.id,
        "Pokemon stored: {}",
        pokemon.name
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedPokemon {
            id: pokemon.id,
            name: pokemon.name,
        }),
    ))
}

/// DELETE /api/myPokemons/:id - ポケモン削除
///
/// 他アカウントのIDは存在しないIDと同じく404を返す
///
/// # Returns
/// * `200 OK` - 削除成功
/// * `404 Not Found` - 存在しない、または所有者が異なる
pub async fn delete_pokemon(
    Extension(account): Extension<AuthenticatedAccount>,
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let not_found = || ApiError::NotFound(format!("Pokemon with id {} not found", id));

    let pokemon_id = id.parse::<i64>().map_err(|_| not_found())?;

    match pokemons::delete_owned(&app_state.db_pool, account.id, pokemon_id).await? {
        DeleteOutcome::Deleted => {
            tracing::info!(account_id = %account.id, pokemon_id, "Pokemon deleted");
            Ok(Json(MessageResponse {
                message: format!("Pokemon with id {} deleted", pokemon_id),
            }))
        }
        DeleteOutcome::NotFound => Err(not_found()),
    }
}

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::get,
};
use mongodb::bson::{doc, Document};
use mongodb::Collection;
use serde_json::Value;

use crate::error::AppError;
use crate::serialize::to_serializable;
use crate::AppState;

async fn list_games(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let store = state.store.require()?;
    let docs = store.get_documents("game", None).await?;
    Ok(Json(Value::Array(
        docs.iter().map(to_serializable).collect(),
    )))
}

async fn get_game_by_code(
    State(state): State<AppState>,
    Path(game_code): Path<String>,
) -> Result<Json<Value>, AppError> {
    let store = state.store.require()?;
    let games: Collection<Document> = store.collection("game");
    let game = games
        .find_one(doc! { "code": &game_code }, None)
        .await?
        .ok_or_else(|| AppError::not_found("Game not found"))?;
    Ok(Json(to_serializable(&game)))
}

/// Options are matched on the stored `game_id` string; a game id with no
/// options (or no game at all) yields an empty array, not an error.
async fn list_options(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let store = state.store.require()?;
    let docs = store
        .get_documents("topupoption", doc! { "game_id": &game_id })
        .await?;
    Ok(Json(Value::Array(
        docs.iter().map(to_serializable).collect(),
    )))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(list_games))
        .route("/games/:code", get(get_game_by_code))
        .route("/games/:code/options", get(list_options))
}

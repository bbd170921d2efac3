use axum::{
    Router,
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use mongodb::bson::{doc, Document};
use mongodb::Collection;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::ids::{OptionId, OrderId};
use crate::models::{Order, TopupOption};
use crate::serialize::to_serializable;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct CreateOrder {
    game_id: String,
    option_id: String,
    player_id: String,
    region: Option<String>,
    payment_method: String,
}

async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrder>,
) -> Result<impl IntoResponse, AppError> {
    // Syntactic validity is checked before the store is consulted.
    let option_id = OptionId::parse(&payload.option_id)?;

    let store = state.store.require()?;
    let options: Collection<TopupOption> = store.collection("topupoption");
    let option = options
        .find_one(doc! { "_id": option_id.object_id() }, None)
        .await?
        .ok_or_else(|| AppError::not_found("Top-up option not found"))?;

    let order = Order::new(
        payload.game_id,
        option_id,
        payload.player_id,
        payload.region,
        payload.payment_method,
        &option,
    )?;
    let order_id = store.create_document("order", &order).await?;

    let orders: Collection<Document> = store.collection("order");
    let created = orders
        .find_one(doc! { "_id": order_id }, None)
        .await?
        .ok_or_else(|| AppError::internal("Order missing after insert"))?;
    Ok((StatusCode::CREATED, Json(to_serializable(&created))))
}

async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let order_id = OrderId::parse(&order_id)?;

    let store = state.store.require()?;
    let orders: Collection<Document> = store.collection("order");
    let order = orders
        .find_one(doc! { "_id": order_id.object_id() }, None)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;
    Ok(Json(to_serializable(&order)))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/:id", get(get_order))
}

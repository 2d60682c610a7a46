//! Handlers for the greeting, bakery, and baked-good routes.

use crate::error::AppError;
use crate::models::{BakedGoodBody, BakeryDetail, BakerySummary};
use crate::service::BakeryService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

pub async fn index() -> Html<&'static str> {
    Html("<h1>Bakery GET API</h1>")
}

pub async fn list_bakeries(State(state): State<AppState>) -> Result<Json<Vec<BakerySummary>>, AppError> {
    let rows = BakeryService::list_bakeries(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn read_bakery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BakeryDetail>, AppError> {
    let bakery = BakeryService::get_bakery_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Bakery not found"))?;
    Ok(Json(bakery))
}

pub async fn baked_goods_by_price(State(state): State<AppState>) -> Result<Json<Vec<BakedGoodBody>>, AppError> {
    let rows = BakeryService::list_baked_goods_by_price(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn most_expensive_baked_good(State(state): State<AppState>) -> Result<Json<BakedGoodBody>, AppError> {
    let good = BakeryService::most_expensive_baked_good(&state.pool)
        .await?
        .ok_or(AppError::NotFound("No baked goods found"))?;
    Ok(Json(good))
}

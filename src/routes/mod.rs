//! Router construction.

use crate::handlers::{baked_goods_by_price, index, list_bakeries, most_expensive_baked_good, read_bakery};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// All API routes. `:id` is extracted as an integer; anything else is rejected before the handler runs.
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/bakeries", get(list_bakeries))
        .route("/bakeries/:id", get(read_bakery))
        .route("/baked_goods/by_price", get(baked_goods_by_price))
        .route("/baked_goods/most_expensive", get(most_expensive_baked_good))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

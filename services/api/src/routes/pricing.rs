use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use cakecalc_pricing::api::{PreviewRequest, PreviewResponse, PricingResult};
use cakecalc_pricing::{engine, preview};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// The two pricing endpoints. Both delegate to the pure calculators in
// cakecalc-pricing; the store satisfies their lookup traits.
// ---------------------------------------------------------------------------

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pricing/:id", get(price_cake))
        .route("/pricing/preview", post(preview_order))
}

#[derive(Deserialize)]
struct PricingQuery {
    /// Comma-separated margin fractions, e.g. "0.1,0.25".
    margins: Option<String>,
}

async fn price_cake(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<PricingQuery>,
) -> Result<Json<PricingResult>, ApiError> {
    let cake = state
        .store
        .cake_with_template(id)
        .ok_or(ApiError::not_found("cake"))?;
    let margins = engine::parse_margins(query.margins.as_deref());
    Ok(Json(engine::price_cake(&cake, &state.store, &margins)))
}

async fn preview_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PreviewRequest>,
) -> Json<PreviewResponse> {
    Json(preview::estimate(&state.rates, &req, &state.store))
}

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cakecalc_model::Cake;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

// Cake reads embed the joined template, which is what the pricing endpoint
// consumes too. The stored row never carries the embedded template.

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cakes", get(list).post(create))
        .route("/cakes/:id", get(get_one).put(update).delete(delete_one))
}

async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Cake>> {
    Json(state.store.cakes_with_templates())
}

async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Cake>, ApiError> {
    state
        .store
        .cake_with_template(id)
        .map(Json)
        .ok_or(ApiError::not_found("cake"))
}

async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Cake>,
) -> Result<impl IntoResponse, ApiError> {
    let row = state.store.cakes.insert_with(|id| Cake {
        id,
        name: body.name.clone(),
        template_id: body.template_id,
        template: None,
        extra_ingredients: body.extra_ingredients.clone(),
        labor: body.labor,
        other_costs: body.other_costs,
    });
    let location = format!("/api/cakes/{}", row.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(row)))
}

async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<Cake>,
) -> Result<StatusCode, ApiError> {
    let mut row = state
        .store
        .cakes
        .get(id)
        .ok_or(ApiError::not_found("cake"))?;
    row.name = body.name;
    row.template_id = body.template_id;
    row.extra_ingredients = body.extra_ingredients;
    row.labor = body.labor;
    row.other_costs = body.other_costs;

    state.store.cakes.replace(id, row);
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.store.cakes.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("cake"))
    }
}

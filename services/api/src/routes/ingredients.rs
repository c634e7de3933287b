use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cakecalc_model::Ingredient;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::validate;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ingredients", get(list).post(create))
        .route("/ingredients/:id", get(get_one).put(update).delete(delete_one))
}

async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Ingredient>> {
    let mut rows = state.store.ingredients.list();
    rows.sort_by_key(|i| i.id);
    Json(rows)
}

async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Ingredient>, ApiError> {
    state
        .store
        .ingredients
        .get(id)
        .map(Json)
        .ok_or(ApiError::not_found("ingredient"))
}

async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Ingredient>,
) -> Result<impl IntoResponse, ApiError> {
    let name = validate::required_string(&body.name, "name")?;
    validate::non_negative(body.cost_per_unit, "costPerUnit")?;

    let row = state.store.ingredients.insert_with(|id| Ingredient {
        id,
        name: name.clone(),
        cost_per_unit: body.cost_per_unit,
    });
    let location = format!("/api/ingredients/{}", row.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(row)))
}

async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<Ingredient>,
) -> Result<StatusCode, ApiError> {
    let mut row = state
        .store
        .ingredients
        .get(id)
        .ok_or(ApiError::not_found("ingredient"))?;
    row.name = validate::required_string(&body.name, "name")?;
    validate::non_negative(body.cost_per_unit, "costPerUnit")?;
    row.cost_per_unit = body.cost_per_unit;

    state.store.ingredients.replace(id, row);
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.store.ingredients.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("ingredient"))
    }
}

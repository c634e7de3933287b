use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cakecalc_model::Role;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::validate;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/roles", get(list).post(create))
        .route("/roles/:id", get(get_one).put(update).delete(delete_one))
}

async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Role>> {
    let mut rows = state.store.roles.list();
    rows.sort_by_key(|r| r.id);
    Json(rows)
}

async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Role>, ApiError> {
    state
        .store
        .roles
        .get(id)
        .map(Json)
        .ok_or(ApiError::not_found("role"))
}

async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Role>,
) -> Result<impl IntoResponse, ApiError> {
    let name = validate::required_string(&body.name, "name")?;
    validate::non_negative(body.hourly_rate, "hourlyRate")?;

    let row = state.store.roles.insert_with(|id| Role {
        id,
        name: name.clone(),
        hourly_rate: body.hourly_rate,
    });
    let location = format!("/api/roles/{}", row.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(row)))
}

async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<Role>,
) -> Result<StatusCode, ApiError> {
    let mut row = state
        .store
        .roles
        .get(id)
        .ok_or(ApiError::not_found("role"))?;
    row.name = validate::required_string(&body.name, "name")?;
    validate::non_negative(body.hourly_rate, "hourlyRate")?;
    row.hourly_rate = body.hourly_rate;

    state.store.roles.replace(id, row);
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.store.roles.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("role"))
    }
}

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cakecalc_model::Template;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::validate;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/templates", get(list).post(create))
        .route("/templates/:id", get(get_one).put(update).delete(delete_one))
}

/// name/size/type must be present after trimming; the base ingredient map
/// must be non-empty. Its JSON is not validated here: the pricing core
/// tolerates malformed maps.
fn validated(body: &Template) -> Result<(String, String, String), ApiError> {
    let name = validate::required_string(&body.name, "name")?;
    let size = validate::required_string(&body.size, "size")?;
    let kind = validate::required_string(&body.kind, "type")?;
    if body.base_ingredients.trim().is_empty() {
        return Err(ApiError::validation(
            "baseIngredients is required and cannot be empty",
        ));
    }
    Ok((name, size, kind))
}

async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Template>> {
    let mut rows = state.store.templates.list();
    rows.sort_by_key(|t| t.id);
    Json(rows)
}

async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Template>, ApiError> {
    state
        .store
        .templates
        .get(id)
        .map(Json)
        .ok_or(ApiError::not_found("template"))
}

async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Template>,
) -> Result<impl IntoResponse, ApiError> {
    let (name, size, kind) = validated(&body)?;

    let row = state.store.templates.insert_with(|id| Template {
        id,
        name: name.clone(),
        size: size.clone(),
        kind: kind.clone(),
        base_ingredients: body.base_ingredients.clone(),
    });
    let location = format!("/api/templates/{}", row.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(row)))
}

async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<Template>,
) -> Result<StatusCode, ApiError> {
    let mut row = state
        .store
        .templates
        .get(id)
        .ok_or(ApiError::not_found("template"))?;
    let (name, size, kind) = validated(&body)?;
    row.name = name;
    row.size = size;
    row.kind = kind;
    row.base_ingredients = body.base_ingredients;

    state.store.templates.replace(id, row);
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.store.templates.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("template"))
    }
}

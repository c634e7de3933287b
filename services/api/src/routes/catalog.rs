use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use cakecalc_model::{CakeShape, CakeSize, CakeType, Filling, Frosting};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Selector catalogs backing the order form: cake types, shapes, sizes,
// fillings and frostings. Lists return active rows in sort order; fetching
// by id returns inactive rows too (they may still be referenced by old
// orders).
// ---------------------------------------------------------------------------

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/caketypes", get(list_types).post(create_type))
        .route("/caketypes/:id", get(get_type))
        .route("/cakeshapes", get(list_shapes).post(create_shape))
        .route("/cakeshapes/:id", get(get_shape))
        .route("/cakesizes", get(list_sizes).post(create_size))
        .route("/cakesizes/:id", get(get_size))
        .route("/fillings", get(list_fillings).post(create_filling))
        .route("/fillings/:id", get(get_filling))
        .route("/frostings", get(list_frostings).post(create_frosting))
        .route("/frostings/:id", get(get_frosting))
}

// --- cake types ---

async fn list_types(State(state): State<Arc<AppState>>) -> Json<Vec<CakeType>> {
    let mut rows: Vec<_> = state
        .store
        .cake_types
        .list()
        .into_iter()
        .filter(|t| t.is_active)
        .collect();
    rows.sort_by_key(|t| (t.sort_order, t.id));
    Json(rows)
}

async fn get_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CakeType>, ApiError> {
    state
        .store
        .cake_types
        .get(id)
        .map(Json)
        .ok_or(ApiError::not_found("cake type"))
}

async fn create_type(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CakeType>,
) -> impl IntoResponse {
    let row = state.store.cake_types.insert_with(|id| CakeType { id, ..body });
    let location = format!("/api/caketypes/{}", row.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(row))
}

// --- cake shapes ---

async fn list_shapes(State(state): State<Arc<AppState>>) -> Json<Vec<CakeShape>> {
    let mut rows: Vec<_> = state
        .store
        .cake_shapes
        .list()
        .into_iter()
        .filter(|s| s.is_active)
        .collect();
    rows.sort_by_key(|s| (s.sort_order, s.id));
    Json(rows)
}

async fn get_shape(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CakeShape>, ApiError> {
    state
        .store
        .cake_shapes
        .get(id)
        .map(Json)
        .ok_or(ApiError::not_found("cake shape"))
}

async fn create_shape(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CakeShape>,
) -> impl IntoResponse {
    let row = state.store.cake_shapes.insert_with(|id| CakeShape { id, ..body });
    let location = format!("/api/cakeshapes/{}", row.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(row))
}

// --- cake sizes ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SizeListQuery {
    shape_id: Option<i64>,
}

async fn list_sizes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SizeListQuery>,
) -> Json<Vec<CakeSize>> {
    let mut rows: Vec<_> = state
        .store
        .cake_sizes
        .list()
        .into_iter()
        .filter(|s| s.is_active)
        .filter(|s| query.shape_id.map_or(true, |shape_id| s.shape_id == shape_id))
        .collect();
    rows.sort_by_key(|s| (s.sort_order, s.id));
    Json(rows)
}

async fn get_size(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CakeSize>, ApiError> {
    state
        .store
        .cake_sizes
        .get(id)
        .map(Json)
        .ok_or(ApiError::not_found("cake size"))
}

async fn create_size(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CakeSize>,
) -> impl IntoResponse {
    let row = state.store.cake_sizes.insert_with(|id| CakeSize { id, ..body });
    let location = format!("/api/cakesizes/{}", row.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(row))
}

// --- fillings ---

async fn list_fillings(State(state): State<Arc<AppState>>) -> Json<Vec<Filling>> {
    let mut rows: Vec<_> = state
        .store
        .fillings
        .list()
        .into_iter()
        .filter(|f| f.is_active)
        .collect();
    rows.sort_by_key(|f| (f.sort_order, f.id));
    Json(rows)
}

async fn get_filling(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Filling>, ApiError> {
    state
        .store
        .fillings
        .get(id)
        .map(Json)
        .ok_or(ApiError::not_found("filling"))
}

async fn create_filling(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Filling>,
) -> impl IntoResponse {
    let row = state.store.fillings.insert_with(|id| Filling { id, ..body });
    let location = format!("/api/fillings/{}", row.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(row))
}

// --- frostings ---

async fn list_frostings(State(state): State<Arc<AppState>>) -> Json<Vec<Frosting>> {
    let mut rows: Vec<_> = state
        .store
        .frostings
        .list()
        .into_iter()
        .filter(|f| f.is_active)
        .collect();
    rows.sort_by_key(|f| (f.sort_order, f.id));
    Json(rows)
}

async fn get_frosting(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Frosting>, ApiError> {
    state
        .store
        .frostings
        .get(id)
        .map(Json)
        .ok_or(ApiError::not_found("frosting"))
}

async fn create_frosting(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Frosting>,
) -> impl IntoResponse {
    let row = state.store.frostings.insert_with(|id| Frosting { id, ..body });
    let location = format!("/api/frostings/{}", row.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(row))
}

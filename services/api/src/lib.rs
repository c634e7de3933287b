pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod validate;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "healthy" })
}

/// Build the full Axum router for the API service.
/// Used by main.rs and integration tests.
pub fn build_router(state: Arc<state::AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        // K8s-style alias (if the process is serving, it's healthy).
        .route("/healthz", get(health))
        .nest("/api", routes::ingredients::router())
        .nest("/api", routes::templates::router())
        .nest("/api", routes::cakes::router())
        .nest("/api", routes::catalog::router())
        .nest("/api", routes::roles::router())
        .nest("/api", routes::pricing::router())
        // The order form is a browser SPA served from elsewhere.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

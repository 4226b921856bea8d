//! Vehicle Catalog API
//!
//! API HTTP para administrar un catálogo de vehículos en memoria:
//! altas (individual y en lote), consultas por id, filtros por color/año,
//! marca/rango de años, combustible, transmisión, dimensiones y peso,
//! promedios por marca, y actualizaciones de velocidad y combustible.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod loader;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Construir el router completo de la aplicación sobre un estado ya armado
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.is_production() {
        cors_middleware_with_origins(&state.config.cors_origins)
    } else {
        cors_middleware()
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de liveness simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicle-catalog",
        "status": "ok"
    }))
}

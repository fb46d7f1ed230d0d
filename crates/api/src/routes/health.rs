use axum::extract::State;
use axum::{routing::get, Json, Router};
use pulsegrid_core::Connectivity;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the sensor is currently considered live.
    pub connectivity: Connectivity,
}

/// GET /health -- returns service health and sensor connectivity.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let connectivity = state.engine.lock().await.connectivity();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        connectivity,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

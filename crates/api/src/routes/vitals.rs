//! Vitals ingress and read-side endpoints.
//!
//! The sensor (or its simulator) POSTs readings here; viewers fetch
//! the rolling history and the latest classified reading. Field
//! presence is validated at this boundary -- the engine only ever sees
//! numeric input, and rejects the non-finite remainder itself.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use pulsegrid_core::{CurrentVitals, Reading, VitalStatus};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for the vitals ingress endpoint.
///
/// Both fields are `Option` so a missing field produces our own 400
/// rather than a serde rejection with an opaque message.
#[derive(Debug, Deserialize)]
pub struct VitalsPayload {
    pub heart_rate: Option<f64>,
    pub spo2: Option<f64>,
}

/// Response body for an accepted reading.
#[derive(Debug, serde::Serialize)]
pub struct IngestResponse {
    pub status: VitalStatus,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /vitals
///
/// Ingest one sensor reading: classify it, publish the resulting
/// events, and re-arm the disconnect watchdog. Invalid input is
/// rejected before the engine mutates anything, and deliberately does
/// NOT re-arm the watchdog -- a sensor sending garbage is as good as
/// disconnected.
pub async fn ingest_reading(
    State(state): State<AppState>,
    Json(payload): Json<VitalsPayload>,
) -> AppResult<Json<DataResponse<IngestResponse>>> {
    let heart_rate = payload
        .heart_rate
        .ok_or_else(|| AppError::BadRequest("heart_rate is required".to_string()))?;
    let spo2 = payload
        .spo2
        .ok_or_else(|| AppError::BadRequest("spo2 is required".to_string()))?;

    let received_at = Utc::now();

    // Single-writer discipline: reading processing and watchdog fires
    // serialize on this lock. The re-arm happens before the lock is
    // released so an expired fire queued on it is cancelled before it
    // can run and disconnect a sensor that just reported in.
    let (events, status) = {
        let mut engine = state.engine.lock().await;
        let events = engine.on_reading(heart_rate, spo2, received_at)?;
        state.watchdog.rearm().await;
        (events, engine.status())
    };

    state.event_bus.publish_all(events);

    tracing::debug!(heart_rate, spo2, ?status, "Reading accepted");

    Ok(Json(DataResponse {
        data: IngestResponse { status },
    }))
}

/// GET /history
///
/// Rolling history snapshot, oldest reading first.
pub async fn get_history(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Reading>>>> {
    let history = state.engine.lock().await.history();
    Ok(Json(DataResponse { data: history }))
}

/// GET /vitals/current
///
/// Latest accepted reading with its classification; 404 before the
/// first reading arrives.
pub async fn get_current(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CurrentVitals>>> {
    let current = state.engine.lock().await.current();
    match current {
        Some(current) => Ok(Json(DataResponse { data: current })),
        None => Err(AppError::NotFound("No readings received yet".to_string())),
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Vitals routes mounted under `/api/v1`.
///
/// ```text
/// POST /vitals           -> ingest_reading
/// GET  /vitals/current   -> get_current
/// GET  /history          -> get_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vitals", post(ingest_reading))
        .route("/vitals/current", get(get_current))
        .route("/history", get(get_history))
}

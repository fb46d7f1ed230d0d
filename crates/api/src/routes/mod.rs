pub mod health;
pub mod vitals;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                 WebSocket (viewer fan-out + history backfill)
///
/// /vitals             ingest a reading (POST)
/// /vitals/current     latest reading + status
/// /history            rolling history snapshot
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .merge(vitals::router())
}

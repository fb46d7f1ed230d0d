use std::sync::Arc;

use pulsegrid_core::VitalsEngine;
use pulsegrid_events::EventBus;
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::watchdog::Watchdog;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The vitals engine. The mutex is the single-writer discipline:
    /// the ingress handler and the watchdog fire both take this lock,
    /// so `on_reading` and `on_watchdog_fire` never interleave.
    pub engine: Arc<Mutex<VitalsEngine>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (viewer clients).
    pub ws_manager: Arc<WsManager>,
    /// Event bus fanning engine events out to subscribers.
    pub event_bus: Arc<EventBus>,
    /// Disconnect watchdog, re-armed on every accepted reading.
    pub watchdog: Arc<Watchdog>,
}

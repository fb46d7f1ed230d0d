//! Event-to-WebSocket fan-out.
//!
//! [`EventBroadcaster`] subscribes to the engine event bus and pushes
//! every event, serialized as a JSON text frame, to all connected
//! viewers. Delivery is fire-and-forget from the engine's point of
//! view: a slow viewer lags on the broadcast channel, it never blocks
//! the ingress path.

use std::sync::Arc;

use axum::extract::ws::Message;
use pulsegrid_core::VitalsEvent;
use tokio::sync::broadcast;

use crate::ws::WsManager;

/// Forwards engine events to WebSocket viewers.
pub struct EventBroadcaster {
    ws_manager: Arc<WsManager>,
}

impl EventBroadcaster {
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the forwarding loop.
    ///
    /// Consumes events from the bus via `receiver` until the channel
    /// closes (i.e. the [`EventBus`](pulsegrid_events::EventBus) is
    /// dropped during shutdown).
    pub async fn run(self, mut receiver: broadcast::Receiver<VitalsEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.forward(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Event broadcaster lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, broadcaster shutting down");
                    break;
                }
            }
        }
    }

    /// Serialize one event and broadcast it to every connection.
    async fn forward(&self, event: &VitalsEvent) {
        let json = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize event");
                return;
            }
        };

        self.ws_manager.broadcast(Message::Text(json.into())).await;
    }
}

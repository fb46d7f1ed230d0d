//! Sensor-dropout watchdog.
//!
//! A single-shot timer that is re-armed on every accepted reading.
//! When it expires, the engine is asked to declare the sensor
//! disconnected and any resulting events are published to the bus.

use std::sync::Arc;
use std::time::Duration;

use pulsegrid_core::VitalsEngine;
use pulsegrid_events::EventBus;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Re-armable disconnect timer.
///
/// `rearm()` cancels the previously scheduled fire and schedules a new
/// one `timeout` from now. Cancel-then-reschedule happens under the
/// slot mutex, so it is atomic with respect to a concurrent re-arm.
///
/// A fire whose sleep already expired can no longer be cancelled, so
/// it re-checks its token after acquiring the engine lock. The ingress
/// handler re-arms while still holding that lock, which means a fire
/// racing a fresh reading always finds its token cancelled and never
/// emits a disconnect for a live sensor.
pub struct Watchdog {
    engine: Arc<Mutex<VitalsEngine>>,
    event_bus: Arc<EventBus>,
    timeout: Duration,
    /// Token for the currently scheduled fire, if any.
    armed: Mutex<Option<CancellationToken>>,
}

impl Watchdog {
    /// Create a watchdog with the given disconnect timeout.
    ///
    /// The watchdog is initially unarmed -- before the first reading
    /// the engine is already in the disconnected state and there is
    /// nothing to detect.
    pub fn new(
        engine: Arc<Mutex<VitalsEngine>>,
        event_bus: Arc<EventBus>,
        timeout: Duration,
    ) -> Self {
        Self {
            engine,
            event_bus,
            timeout,
            armed: Mutex::new(None),
        }
    }

    /// Cancel any pending fire and schedule a new one `timeout` from now.
    pub async fn rearm(&self) {
        let mut slot = self.armed.lock().await;

        if let Some(previous) = slot.take() {
            previous.cancel();
        }

        let token = CancellationToken::new();
        let task_token = token.clone();
        let engine = Arc::clone(&self.engine);
        let event_bus = Arc::clone(&self.event_bus);
        let timeout = self.timeout;

        tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(timeout) => {
                    let mut engine = engine.lock().await;
                    // A reading that arrived while this fire was queued
                    // on the engine lock has already re-armed the
                    // watchdog and cancelled this token. Stale fires
                    // must not act.
                    if task_token.is_cancelled() {
                        return;
                    }
                    let events = engine.on_watchdog_fire();
                    if !events.is_empty() {
                        tracing::warn!(
                            timeout_secs = timeout.as_secs(),
                            "No reading within disconnect timeout, sensor declared disconnected"
                        );
                        event_bus.publish_all(events);
                    }
                }
                () = task_token.cancelled() => {
                    // Re-armed or shut down before expiry.
                }
            }
        });

        *slot = Some(token);
    }

    /// Cancel the pending fire, if any. Used during graceful shutdown.
    pub async fn shutdown(&self) {
        if let Some(token) = self.armed.lock().await.take() {
            token.cancel();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

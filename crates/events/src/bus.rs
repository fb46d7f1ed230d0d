//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for
//! [`VitalsEvent`]s. It is designed to be shared via `Arc<EventBus>`
//! across the application. Publishing is fire-and-forget: a slow or
//! absent subscriber can never block the ingress path.

use pulsegrid_core::VitalsEvent;
use tokio::sync::broadcast;

/// Default buffer capacity for the broadcast channel.
///
/// Readings arrive roughly once a second, so even a subscriber stalled
/// for minutes will not wrap the buffer.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`VitalsEvent`].
///
/// # Usage
///
/// ```rust
/// use pulsegrid_core::{Connectivity, VitalsEvent};
/// use pulsegrid_events::EventBus;
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(VitalsEvent::Disconnect {
///     status: Connectivity::Disconnected,
/// });
/// ```
pub struct EventBus {
    sender: broadcast::Sender<VitalsEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are
    /// dropped and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently
    /// dropped -- there is nobody watching, and the engine keeps the
    /// state that matters.
    pub fn publish(&self, event: VitalsEvent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Publish a batch of events in order.
    pub fn publish_all(&self, events: impl IntoIterator<Item = VitalsEvent>) {
        for event in events {
            self.publish(event);
        }
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<VitalsEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

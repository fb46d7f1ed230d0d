//! The stateful vitals monitoring engine.
//!
//! [`VitalsEngine`] owns the last accepted reading, the bounded
//! rolling history, the connectivity flag, and the alert hysteresis.
//! It is deliberately free of timers and transport: `on_reading` and
//! `on_watchdog_fire` return the events to emit, and the caller is
//! responsible for broadcasting them and re-arming the disconnect
//! watchdog. This keeps the engine unit-testable without a socket
//! layer in sight.

use std::collections::VecDeque;

use crate::error::CoreError;
use crate::events::VitalsEvent;
use crate::thresholds::classify;
use crate::types::{Connectivity, Reading, Timestamp, VitalStatus};

/// Default rolling history capacity, in readings.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Last accepted reading together with its classification.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CurrentVitals {
    pub heart_rate: f64,
    pub spo2: f64,
    pub status: VitalStatus,
    pub timestamp: Timestamp,
}

/// Single-patient vitals state machine.
///
/// Starts `(Disconnected, Normal)` with an empty history. Mutated only
/// by [`on_reading`](Self::on_reading) and
/// [`on_watchdog_fire`](Self::on_watchdog_fire); all callers must
/// serialize access (the api crate holds the engine behind a single
/// `Mutex` so a reading and a watchdog fire never interleave).
pub struct VitalsEngine {
    current: Option<Reading>,
    status: VitalStatus,
    connectivity: Connectivity,
    history: VecDeque<Reading>,
    capacity: usize,
}

impl VitalsEngine {
    /// Create an engine with the given history capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            current: None,
            status: VitalStatus::Normal,
            connectivity: Connectivity::Disconnected,
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Process one inbound reading.
    ///
    /// On success, returns the events to broadcast: a
    /// [`VitalsEvent::VitalsUpdate`] for every accepted reading, plus a
    /// [`VitalsEvent::StatusChange`] when (and only when) the
    /// classification actually changed -- repeated readings that keep
    /// the same status must not re-trigger alert side effects.
    ///
    /// Non-finite input is rejected with no state mutation at all: no
    /// history append, no connectivity change. The caller must skip the
    /// watchdog re-arm on error so a sensor stuck emitting garbage is
    /// still reported as disconnected.
    pub fn on_reading(
        &mut self,
        heart_rate: f64,
        spo2: f64,
        received_at: Timestamp,
    ) -> Result<Vec<VitalsEvent>, CoreError> {
        if !heart_rate.is_finite() {
            return Err(CoreError::InvalidReading {
                field: "heart_rate",
            });
        }
        if !spo2.is_finite() {
            return Err(CoreError::InvalidReading { field: "spo2" });
        }

        let reading = Reading {
            heart_rate,
            spo2,
            received_at,
        };

        self.history.push_back(reading.clone());
        while self.history.len() > self.capacity {
            self.history.pop_front();
        }
        self.current = Some(reading);
        self.connectivity = Connectivity::Connected;

        let new_status = classify(heart_rate, spo2);

        let mut events = vec![VitalsEvent::VitalsUpdate {
            heart_rate,
            spo2,
            status: new_status,
            timestamp: received_at,
        }];

        if new_status != self.status {
            self.status = new_status;
            events.push(VitalsEvent::StatusChange {
                status: new_status,
                heart_rate,
                spo2,
                timestamp: received_at,
            });
        }

        Ok(events)
    }

    /// Handle a watchdog expiry: no reading arrived within the
    /// disconnect timeout of the last one.
    ///
    /// Idempotent -- a stale timer firing while already disconnected
    /// returns no events rather than re-emitting.
    pub fn on_watchdog_fire(&mut self) -> Vec<VitalsEvent> {
        if self.connectivity == Connectivity::Disconnected {
            return Vec::new();
        }

        self.connectivity = Connectivity::Disconnected;
        vec![VitalsEvent::Disconnect {
            status: Connectivity::Disconnected,
        }]
    }

    /// Snapshot of the rolling history, oldest first.
    pub fn history(&self) -> Vec<Reading> {
        self.history.iter().cloned().collect()
    }

    /// Last accepted reading with its classification, or `None` before
    /// the first reading arrives.
    pub fn current(&self) -> Option<CurrentVitals> {
        self.current.as_ref().map(|r| CurrentVitals {
            heart_rate: r.heart_rate,
            spo2: r.spo2,
            status: self.status,
            timestamp: r.received_at,
        })
    }

    pub fn status(&self) -> VitalStatus {
        self.status
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }
}

impl Default for VitalsEngine {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;

    fn feed(engine: &mut VitalsEngine, heart_rate: f64, spo2: f64) -> Vec<VitalsEvent> {
        engine
            .on_reading(heart_rate, spo2, Utc::now())
            .expect("reading should be accepted")
    }

    fn status_changes(events: &[VitalsEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, VitalsEvent::StatusChange { .. }))
            .count()
    }

    fn updates(events: &[VitalsEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, VitalsEvent::VitalsUpdate { .. }))
            .count()
    }

    #[test]
    fn starts_disconnected_with_empty_history() {
        let engine = VitalsEngine::default();

        assert_eq!(engine.connectivity(), Connectivity::Disconnected);
        assert_eq!(engine.status(), VitalStatus::Normal);
        assert!(engine.history().is_empty());
        assert!(engine.current().is_none());
    }

    #[test]
    fn first_reading_connects_and_emits_update() {
        let mut engine = VitalsEngine::default();

        let events = feed(&mut engine, 75.0, 98.0);

        assert_eq!(engine.connectivity(), Connectivity::Connected);
        assert_eq!(events.len(), 1);
        assert_matches!(
            &events[0],
            VitalsEvent::VitalsUpdate {
                status: VitalStatus::Normal,
                ..
            }
        );
    }

    #[test]
    fn first_critical_reading_emits_update_and_status_change() {
        let mut engine = VitalsEngine::default();

        let events = feed(&mut engine, 135.0, 88.0);

        assert_eq!(updates(&events), 1);
        assert_eq!(status_changes(&events), 1);
        // Update comes first so viewers render the number before the alarm.
        assert_matches!(&events[0], VitalsEvent::VitalsUpdate { .. });
        assert_matches!(
            &events[1],
            VitalsEvent::StatusChange {
                status: VitalStatus::Critical,
                ..
            }
        );
    }

    #[test]
    fn repeated_critical_readings_do_not_refire_alert() {
        let mut engine = VitalsEngine::default();

        let mut all_events = Vec::new();
        for _ in 0..6 {
            all_events.extend(feed(&mut engine, 135.0, 88.0));
        }

        // Hysteresis: six updates, exactly one transition.
        assert_eq!(updates(&all_events), 6);
        assert_eq!(status_changes(&all_events), 1);
    }

    #[test]
    fn recovery_to_normal_emits_second_status_change() {
        let mut engine = VitalsEngine::default();

        let critical = feed(&mut engine, 135.0, 88.0);
        let normal = feed(&mut engine, 75.0, 98.0);

        assert_eq!(status_changes(&critical), 1);
        assert_eq!(status_changes(&normal), 1);
        assert_matches!(
            normal.last().unwrap(),
            VitalsEvent::StatusChange {
                status: VitalStatus::Normal,
                ..
            }
        );
        assert_eq!(engine.status(), VitalStatus::Normal);
    }

    #[test]
    fn history_is_bounded_and_keeps_last_n_in_order() {
        let mut engine = VitalsEngine::new(3);

        for i in 0..4 {
            feed(&mut engine, 70.0 + f64::from(i), 98.0);
        }

        let history = engine.history();
        assert_eq!(history.len(), 3);
        // Oldest reading (70.0) evicted; remainder is in arrival order.
        let rates: Vec<f64> = history.iter().map(|r| r.heart_rate).collect();
        assert_eq!(rates, vec![71.0, 72.0, 73.0]);
    }

    #[test]
    fn zero_capacity_keeps_history_empty() {
        let mut engine = VitalsEngine::new(0);

        for _ in 0..10 {
            feed(&mut engine, 75.0, 98.0);
        }

        assert!(engine.history().is_empty());
        // The latest reading is still tracked even without history.
        assert!(engine.current().is_some());
    }

    #[test]
    fn default_capacity_bounds_history_at_fifty() {
        let mut engine = VitalsEngine::default();

        for _ in 0..(DEFAULT_HISTORY_CAPACITY + 1) {
            feed(&mut engine, 75.0, 98.0);
        }

        assert_eq!(engine.history().len(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn watchdog_fire_disconnects_and_emits_once() {
        let mut engine = VitalsEngine::default();
        feed(&mut engine, 75.0, 98.0);

        let first = engine.on_watchdog_fire();
        assert_eq!(first.len(), 1);
        assert_matches!(
            &first[0],
            VitalsEvent::Disconnect {
                status: Connectivity::Disconnected
            }
        );
        assert_eq!(engine.connectivity(), Connectivity::Disconnected);

        // A stale timer firing again must not re-emit.
        let second = engine.on_watchdog_fire();
        assert!(second.is_empty());
    }

    #[test]
    fn watchdog_fire_leaves_status_unchanged() {
        let mut engine = VitalsEngine::default();
        feed(&mut engine, 135.0, 88.0);

        engine.on_watchdog_fire();

        assert_eq!(engine.status(), VitalStatus::Critical);
    }

    #[test]
    fn reading_after_disconnect_reconnects() {
        let mut engine = VitalsEngine::default();
        feed(&mut engine, 75.0, 98.0);
        engine.on_watchdog_fire();
        assert_eq!(engine.connectivity(), Connectivity::Disconnected);

        let events = feed(&mut engine, 76.0, 98.0);

        assert_eq!(engine.connectivity(), Connectivity::Connected);
        assert_eq!(updates(&events), 1);
    }

    #[test]
    fn invalid_reading_leaves_state_untouched() {
        let mut engine = VitalsEngine::default();
        feed(&mut engine, 75.0, 98.0);

        let err = engine.on_reading(f64::NAN, 98.0, Utc::now());
        assert_matches!(
            err,
            Err(CoreError::InvalidReading {
                field: "heart_rate"
            })
        );

        let err = engine.on_reading(75.0, f64::INFINITY, Utc::now());
        assert_matches!(err, Err(CoreError::InvalidReading { field: "spo2" }));

        // No history append, no status flap.
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.connectivity(), Connectivity::Connected);
        assert_eq!(engine.status(), VitalStatus::Normal);
    }

    #[test]
    fn current_reflects_last_reading_and_status() {
        let mut engine = VitalsEngine::default();
        feed(&mut engine, 75.0, 98.0);
        feed(&mut engine, 135.0, 88.0);

        let current = engine.current().expect("current should be set");
        assert_eq!(current.heart_rate, 135.0);
        assert_eq!(current.spo2, 88.0);
        assert_eq!(current.status, VitalStatus::Critical);
    }

    #[test]
    fn normal_critical_normal_scenario() {
        // Full episode: three readings a second apart.
        let mut engine = VitalsEngine::default();
        let mut all_events = Vec::new();

        all_events.extend(feed(&mut engine, 75.0, 98.0));
        all_events.extend(feed(&mut engine, 135.0, 88.0));
        all_events.extend(feed(&mut engine, 80.0, 97.0));

        assert_eq!(updates(&all_events), 3);
        assert_eq!(status_changes(&all_events), 2);
        assert_eq!(engine.history().len(), 3);
        assert_eq!(engine.status(), VitalStatus::Normal);
    }
}

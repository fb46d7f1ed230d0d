//! Outbound event values produced by the vitals engine.
//!
//! The engine never talks to a broadcaster directly -- it returns these
//! values and the caller owns delivery. Wire names (`vitals_update`,
//! `critical_alert`, `device_status`) are part of the viewer protocol.

use serde::{Deserialize, Serialize};

use crate::types::{Connectivity, Timestamp, VitalStatus};

/// An event emitted by [`VitalsEngine`](crate::engine::VitalsEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VitalsEvent {
    /// Live display refresh. Emitted for every accepted reading and
    /// always carries the current status.
    #[serde(rename = "vitals_update")]
    VitalsUpdate {
        heart_rate: f64,
        spo2: f64,
        status: VitalStatus,
        timestamp: Timestamp,
    },

    /// Alert-state transition. Emitted once per actual status change,
    /// including recovery back to NORMAL so viewers can clear a
    /// latched alarm.
    #[serde(rename = "critical_alert")]
    StatusChange {
        status: VitalStatus,
        heart_rate: f64,
        spo2: f64,
        timestamp: Timestamp,
    },

    /// Sensor dropout. Carries no vitals fields.
    #[serde(rename = "device_status")]
    Disconnect { status: Connectivity },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

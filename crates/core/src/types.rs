//! Shared domain types for vitals monitoring.

use serde::{Deserialize, Serialize};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A single accepted sensor sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Heart rate in beats per minute.
    pub heart_rate: f64,
    /// Blood-oxygen saturation as a percentage.
    pub spo2: f64,
    /// When the ingress accepted the sample (UTC).
    pub received_at: Timestamp,
}

/// Clinical classification of a reading.
///
/// Serialized in SCREAMING_SNAKE case (`"NORMAL"`, `"WARNING"`,
/// `"CRITICAL"`) to match the wire format viewers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VitalStatus {
    /// Both vitals within normal range.
    Normal,
    /// Elevated heart rate or mildly depressed SpO2.
    Warning,
    /// Heart rate or SpO2 beyond the critical thresholds.
    Critical,
}

/// Whether the sensor is currently considered live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Connectivity {
    Connected,
    Disconnected,
}

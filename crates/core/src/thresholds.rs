//! Threshold evaluation for vitals readings.
//!
//! Pure logic -- no state, no side effects. The caller is responsible
//! for rejecting non-finite input before classification.

use crate::types::VitalStatus;

/// Heart rate above this (strict) is critical, in BPM.
pub const HEART_RATE_CRITICAL: f64 = 120.0;

/// SpO2 below this (strict) is critical, in percent.
pub const SPO2_CRITICAL: f64 = 90.0;

/// Heart rate above this (strict) is a warning, in BPM.
pub const HEART_RATE_WARNING: f64 = 100.0;

/// SpO2 below this (strict) is a warning, in percent.
pub const SPO2_WARNING: f64 = 94.0;

/// Classify a reading against the fixed clinical thresholds.
///
/// All comparisons are strict: a heart rate of exactly 120 BPM or an
/// SpO2 of exactly 90% is *not* critical.
pub fn classify(heart_rate: f64, spo2: f64) -> VitalStatus {
    if heart_rate > HEART_RATE_CRITICAL || spo2 < SPO2_CRITICAL {
        VitalStatus::Critical
    } else if heart_rate > HEART_RATE_WARNING || spo2 < SPO2_WARNING {
        VitalStatus::Warning
    } else {
        VitalStatus::Normal
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

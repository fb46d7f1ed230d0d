//! Simulated vitals waveform.
//!
//! Produces a sine-wave heart rate and SpO2 with random jitter, plus
//! an occasional critical episode so the alerting path gets exercised
//! end to end without waiting for a real patient to deteriorate.

use rand::Rng;

/// One generated sample.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedVitals {
    pub heart_rate: f64,
    pub spo2: f64,
}

/// Probability per tick of simulating a critical episode.
const CRITICAL_EPISODE_PROBABILITY: f64 = 0.05;

/// Heart rate pushed during a simulated critical episode (BPM).
const EPISODE_HEART_RATE: f64 = 135.0;

/// SpO2 pushed during a simulated critical episode (percent).
const EPISODE_SPO2: f64 = 88.0;

/// Generates a plausible resting-patient waveform.
///
/// Baseline 75 BPM ±10 and 97% SpO2 ±2, both with random jitter,
/// SpO2 clamped to the physically sensible [85, 100] band.
pub struct VitalsSimulator {
    tick: f64,
}

impl VitalsSimulator {
    pub fn new() -> Self {
        Self { tick: 0.0 }
    }

    /// Advance the waveform and produce the next sample.
    pub fn next_sample(&mut self) -> SimulatedVitals {
        self.tick += 0.1;
        let mut rng = rand::rng();

        if rng.random_bool(CRITICAL_EPISODE_PROBABILITY) {
            tracing::info!("Simulating critical vitals episode");
            return SimulatedVitals {
                heart_rate: EPISODE_HEART_RATE,
                spo2: EPISODE_SPO2,
            };
        }

        let heart_rate = 75.0 + self.tick.sin() * 10.0 + rng.random_range(-2.5..2.5);
        let spo2 = 97.0 + (self.tick * 0.5).sin() * 2.0 + rng.random_range(-0.5..0.5);

        SimulatedVitals {
            heart_rate: heart_rate.round(),
            spo2: spo2.round().clamp(85.0, 100.0),
        }
    }
}

impl Default for VitalsSimulator {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Reading push loop.
//!
//! Periodically samples the simulator and POSTs the reading to the
//! backend ingress. Failures are logged and the loop continues --
//! sensor dropout is exactly what the backend's watchdog exists to
//! detect, so dying on a failed send would defeat the point.

use std::time::Duration;

use serde::Serialize;

use crate::simulator::VitalsSimulator;

/// Outgoing reading payload sent to the ingress endpoint.
///
/// The timestamp is informational; the ingress stamps its own
/// `received_at` on acceptance.
#[derive(Debug, Serialize)]
struct ReadingPayload {
    heart_rate: f64,
    spo2: f64,
    timestamp: String,
}

/// Run the push loop indefinitely.
///
/// This function never returns under normal operation.
pub async fn run(ingress_url: &str, interval: Duration, mut simulator: VitalsSimulator) {
    let client = reqwest::Client::new();
    let mut ticker = tokio::time::interval(interval);

    loop {
        ticker.tick().await;

        let sample = simulator.next_sample();
        let payload = ReadingPayload {
            heart_rate: sample.heart_rate,
            spo2: sample.spo2,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        match client.post(ingress_url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(
                    heart_rate = payload.heart_rate,
                    spo2 = payload.spo2,
                    "Reading sent"
                );
            }
            Ok(response) => {
                tracing::warn!(
                    status = %response.status(),
                    "Ingress rejected reading"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to send reading");
            }
        }
    }
}

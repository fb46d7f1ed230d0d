//! `pulsegrid-agent` -- simulated vitals sensor daemon.
//!
//! Stands in for the wearable during development: generates a
//! plausible heart-rate/SpO2 waveform and POSTs it to the PulseGrid
//! ingress once a second. Stop it to watch the backend's disconnect
//! watchdog fire.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default                               | Description                    |
//! |----------------------|----------|---------------------------------------|--------------------------------|
//! | `INGRESS_URL`        | no       | `http://localhost:5000/api/v1/vitals` | Vitals ingress endpoint        |
//! | `SEND_INTERVAL_SECS` | no       | `1`                                   | Seconds between readings       |

use std::time::Duration;

use pulsegrid_agent::sender;
use pulsegrid_agent::simulator::VitalsSimulator;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default interval between generated readings.
const DEFAULT_INTERVAL_SECS: u64 = 1;

/// Default ingress endpoint for local development.
const DEFAULT_INGRESS_URL: &str = "http://localhost:5000/api/v1/vitals";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulsegrid_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ingress_url =
        std::env::var("INGRESS_URL").unwrap_or_else(|_| DEFAULT_INGRESS_URL.to_string());

    let interval_secs: u64 = std::env::var("SEND_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    let interval = Duration::from_secs(interval_secs);

    tracing::info!(
        ingress_url = %ingress_url,
        interval_secs,
        "Starting pulsegrid-agent",
    );

    sender::run(&ingress_url, interval, VitalsSimulator::new()).await;
}

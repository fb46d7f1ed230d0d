//! Core domain logic for PulseGrid: vitals classification and the
//! stateful monitoring engine.
//!
//! Pure logic -- no I/O, no timers, no sockets. The engine returns the
//! events it wants emitted; the api crate owns delivery and the
//! disconnect watchdog schedule.

pub mod engine;
pub mod error;
pub mod events;
pub mod thresholds;
pub mod types;

pub use engine::{CurrentVitals, VitalsEngine, DEFAULT_HISTORY_CAPACITY};
pub use error::CoreError;
pub use events::VitalsEvent;
pub use thresholds::classify;
pub use types::{Connectivity, Reading, Timestamp, VitalStatus};

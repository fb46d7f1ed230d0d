//! PulseGrid sensor simulator library.
//!
//! Stands in for the wearable sensor during development: generates a
//! plausible vitals waveform and pushes it to the backend ingress.

pub mod sender;
pub mod simulator;

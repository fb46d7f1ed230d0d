//! In-process event distribution for PulseGrid.
//!
//! The engine produces [`VitalsEvent`](pulsegrid_core::VitalsEvent)
//! values; this crate provides the [`EventBus`] that fans them out to
//! any number of independent subscribers (the WebSocket broadcaster,
//! tests, future consumers).

pub mod bus;

pub use bus::EventBus;

//! PulseGrid API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! watchdog, WebSocket infrastructure) so integration tests and the
//! binary entrypoint can both access them.

pub mod broadcast;
pub mod config;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;
pub mod watchdog;
pub mod ws;

//! PagePulse API server library.
//!
//! Exposed as a library so integration tests can build the same router
//! and middleware stack the binary runs.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

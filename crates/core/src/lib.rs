//! Shared domain types for the PagePulse backend.
//!
//! This crate holds the pieces every other crate agrees on: ID and
//! timestamp aliases, the domain error type, and the visit query rules.
//! It has no database or HTTP dependencies.

pub mod error;
pub mod types;
pub mod visits;

//! Route definitions.
//!
//! Route map:
//!
//! ```text
//! /health              liveness probe (plain text)
//!
//! /visits              record visit (POST), list visits for a URL (GET ?url=)
//! /visits/latest       most recent visit for a URL (GET ?url=)
//! /visits/stats        aggregate statistics (GET)
//! /visits/recent       most recent visits across URLs (GET ?limit=)
//! ```

pub mod health;
pub mod visits;

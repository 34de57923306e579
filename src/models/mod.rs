//! Data models for the DLS console.
//!
//! These models mirror the JSON the backend's `/-/origins` and `/-/leases`
//! endpoints return. The console only ever reads them.

mod lease;
mod origin;

pub use lease::*;
pub use origin::*;

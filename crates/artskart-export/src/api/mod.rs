//! API client module
//!
//! HTTP client for the Artskart public API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{ApiClient, ObservationQuery};
pub use types::*;

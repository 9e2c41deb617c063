//! Artskart Common Library
//!
//! Shared functionality for the artskart-export workspace:
//!
//! - **Logging**: Centralized tracing configuration and initialization

pub mod logging;

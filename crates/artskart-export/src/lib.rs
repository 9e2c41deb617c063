//! Artskart Observation Export
//!
//! Exports species observation records from the Artskart public API
//! (artskart.artsdatabanken.no) to a CSV file.
//!
//! # Pipeline
//!
//! The export runs as a single sequential pipeline:
//!
//! 1. **Term Loader**: read species scientific names from a line-oriented
//!    text file (`terms`)
//! 2. **Taxon Resolver**: resolve each name to a taxon identifier via the
//!    taxon search endpoint, warning about and skipping unknown names
//!    (`taxon`)
//! 3. **Observation Fetcher**: drain the paged observations list endpoint
//!    for the resolved taxa, restricted by area code, from-date, and an
//!    optional WKT polygon (`observations`)
//! 4. **CSV Writer**: write one row per observation in a fixed 18-column
//!    layout (`export`)

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod observations;
pub mod progress;
pub mod taxon;
pub mod terms;

// Re-export commonly used types
pub use config::ExportConfig;
pub use error::{ExportError, Result};

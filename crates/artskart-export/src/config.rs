//! Run configuration for the Artskart export
//!
//! All run parameters are constant-level settings, assembled into an
//! [`ExportConfig`] value once at startup and passed explicitly into the
//! pipeline. There are no CLI flags and no environment variables.

use std::path::PathBuf;

// ============================================================================
// Export Configuration Constants
// ============================================================================

/// Base URL of the Artskart public API.
pub const API_BASE_URL: &str = "https://artskart.artsdatabanken.no/publicapi";

/// Per-request timeout in seconds, fixed for every call.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Number of observations requested per page.
pub const PAGE_SIZE: u32 = 1000;

/// Species list input file, one scientific name per line.
pub const SPECIES_PATH: &str = "species.txt";

/// CSV output file, overwritten on each run.
pub const OUTPUT_PATH: &str = "output.csv";

/// Geographic area code filter ("5001" is Trondheim).
pub const AREAS: &str = "5001";

/// Lower bound on observation date, "DD.MM.YYYY" format; `None` disables
/// the date filter.
pub const FROM_DATE: Option<&str> = Some("01.01.2000");

/// Optional WKT polygon spatial filter; `None` disables it.
pub const POLYGON: Option<&str> = None;

/// Export run configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// API base URL
    pub base_url: String,

    /// Species list input path
    pub species_path: PathBuf,

    /// CSV output path
    pub output_path: PathBuf,

    /// Area code filter
    pub areas: String,

    /// Observation date lower bound, "DD.MM.YYYY"
    pub from_date: Option<String>,

    /// WKT polygon spatial filter
    pub polygon: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            species_path: PathBuf::from(SPECIES_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            areas: AREAS.to_string(),
            from_date: FROM_DATE.map(str::to_string),
            polygon: POLYGON.map(str::to_string),
        }
    }
}

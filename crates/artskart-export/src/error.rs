//! Error types for the Artskart export
//!
//! All fatal errors unwind to the binary boundary and terminate the run;
//! messages are designed to be user-facing.

use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Error type for the export pipeline
#[derive(Error, Debug)]
pub enum ExportError {
    /// File system operation failed
    #[error("File operation failed: {0}. Check the path and file permissions.")]
    Io(#[from] std::io::Error),

    /// HTTP request failed (timeout, connection error, or non-2xx status)
    #[error("Network request failed: {0}. Check your internet connection and the API base URL.")]
    Http(#[from] reqwest::Error),

    /// An endpoint returned a body that does not decode to the expected shape
    #[error("Unexpected response from the {endpoint} endpoint: {detail}")]
    UnexpectedResponse {
        endpoint: &'static str,
        detail: String,
    },

    /// An observation record lacks a field required by the CSV projection
    #[error("Observation record is missing the '{0}' field")]
    MissingField(&'static str),

    /// CSV output could not be written
    #[error("Failed to write CSV output: {0}")]
    Csv(#[from] csv::Error),
}

impl ExportError {
    /// Create an unexpected-response error for the named endpoint
    pub fn unexpected_response(endpoint: &'static str, detail: impl ToString) -> Self {
        Self::UnexpectedResponse {
            endpoint,
            detail: detail.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_response_message() {
        let err = ExportError::unexpected_response("taxon search", "expected a JSON array");
        assert_eq!(
            err.to_string(),
            "Unexpected response from the taxon search endpoint: expected a JSON array"
        );
    }

    #[test]
    fn test_missing_field_message() {
        let err = ExportError::MissingField("Locality");
        assert!(err.to_string().contains("Locality"));
    }
}

//! Species term loading
//!
//! Reads the species list input, one scientific name per line.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Load species terms from a line-oriented text file.
///
/// Lines are whitespace-trimmed and blank lines skipped; input order is
/// preserved. An empty result means "no species filter" downstream. A
/// missing or unreadable file is fatal.
pub fn load_terms(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

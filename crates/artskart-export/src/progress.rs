//! Progress bar utilities
//!
//! Visual progress reporting for the page-fetch loop. Cosmetic only; the
//! pipeline does not depend on it.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for follow-up page fetches.
///
/// The caller clears it from the terminal once pagination completes.
pub fn page_progress(pages: u32) -> ProgressBar {
    let pb = ProgressBar::new(u64::from(pages));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    pb.set_message("Pages");
    pb
}

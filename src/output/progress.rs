//! Progress bar creation.

use indicatif::{ProgressBar, ProgressStyle};

/// Create the download progress bar.
///
/// The length starts at zero and grows as records are discovered, so the
/// bar tracks dynamically created work.
pub fn create_download_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} photos")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

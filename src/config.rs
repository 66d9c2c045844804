//! Runtime configuration.
//!
//! Settings come from the CLI only; there is no config file layer.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default listing endpoint.
pub const DEFAULT_LISTING_URL: &str =
    "http://app-homevision-staging.herokuapp.com/api_project/houses";

/// Default output directory for downloaded photos.
pub const DEFAULT_OUTPUT_DIR: &str = "photos";

/// Default number of listing pages to fetch.
pub const DEFAULT_PAGES: u32 = 10;

/// Default attempt budget for page fetches and photo downloads.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default fixed delay between retry attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Validated runtime settings for one batch run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Listing endpoint base URL (`?page=N` is appended per request).
    pub base_url: String,

    /// Number of pages to fetch, ordinals 1..=pages.
    pub pages: u32,

    /// Directory photos are written to.
    pub output_dir: PathBuf,

    /// Maximum attempts per page fetch and per photo download.
    pub max_attempts: u32,

    /// Fixed delay between retry attempts.
    pub retry_delay: Duration,

    /// Cap on concurrently running photo downloads. `None` preserves the
    /// unbounded fan-out of the original job.
    pub max_concurrent_downloads: Option<usize>,

    /// Suppress the progress bar.
    pub quiet: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LISTING_URL.to_string(),
            pages: DEFAULT_PAGES,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            max_concurrent_downloads: None,
            quiet: false,
        }
    }
}

/// Validate a run configuration before starting the pipeline.
pub fn validate_config(config: &RunConfig) -> Result<()> {
    let url = Url::parse(&config.base_url)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "base_url".into(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if config.pages == 0 {
        return Err(Error::ConfigValidation {
            field: "pages".into(),
            message: "must be at least 1".into(),
        });
    }

    if config.max_attempts == 0 {
        return Err(Error::ConfigValidation {
            field: "max_attempts".into(),
            message: "must be at least 1".into(),
        });
    }

    if config.max_concurrent_downloads == Some(0) {
        return Err(Error::ConfigValidation {
            field: "max_downloads".into(),
            message: "must be at least 1 when set".into(),
        });
    }

    Ok(())
}

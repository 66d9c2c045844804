//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{RunConfig, DEFAULT_LISTING_URL};

/// House photo batch downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "housevision-downloader",
    version,
    about = "Download house listing photos from the HomeVision API",
    long_about = "A one-shot batch job that fetches a paginated house listing and\n\
                  downloads each house's photo into a local directory.\n\n\
                  Pages that never become ready and photos that never download are\n\
                  logged and skipped; the run always completes."
)]
pub struct Args {
    /// Listing API base URL.
    #[arg(short = 'u', long = "base-url", env = "HOUSEVISION_BASE_URL", default_value = DEFAULT_LISTING_URL)]
    pub base_url: String,

    /// Number of listing pages to fetch.
    #[arg(short, long, default_value_t = 10)]
    pub pages: u32,

    /// Directory photos are written to.
    #[arg(short = 'd', long = "directory", default_value = "photos")]
    pub output_dir: PathBuf,

    /// Maximum attempts per page fetch and per photo download.
    #[arg(long, default_value_t = 5)]
    pub max_attempts: u32,

    /// Seconds to wait between retry attempts.
    #[arg(long, default_value_t = 2)]
    pub retry_delay: u64,

    /// Cap on concurrently running photo downloads (unbounded when omitted).
    #[arg(long = "max-downloads")]
    pub max_downloads: Option<usize>,

    /// Hide the download progress bar.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Build the runtime configuration from the parsed arguments.
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            base_url: self.base_url,
            pages: self.pages,
            output_dir: self.output_dir,
            max_attempts: self.max_attempts,
            retry_delay: Duration::from_secs(self.retry_delay),
            max_concurrent_downloads: self.max_downloads,
            quiet: self.quiet,
        }
    }
}

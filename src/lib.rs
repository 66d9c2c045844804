//! HouseVision Photo Downloader
//!
//! A one-shot batch job that fetches a paginated house listing from a
//! remote HTTP API and downloads each house's photo to a local directory.
//!
//! # Behavior
//!
//! - Listing pages are fetched concurrently; a page answering `ok: false`
//!   or failing at the transport layer is retried with a fixed backoff up
//!   to a bounded attempt budget, then abandoned.
//! - Every record from a ready page gets exactly one photo download task,
//!   itself retried within the same budget. Photos land at
//!   `id-<id>-<address><ext>` under the output directory.
//! - The run completes only after every page has resolved and every
//!   dispatched download has finished; per-item failures are reported in a
//!   [`download::RunReport`] and never abort the run.
//!
//! # Example
//!
//! ```no_run
//! use tokio_util::sync::CancellationToken;
//! use housevision_downloader::{config::RunConfig, download::run_pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RunConfig::default();
//!     let report = run_pipeline(&config, CancellationToken::new()).await?;
//!     println!("saved {} photos", report.downloads_succeeded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{House, HouseApi, ListingPage};
pub use config::{validate_config, RunConfig};
pub use download::{run_pipeline, DownloadOutcome, PageOutcome, PageResolution, RunReport};
pub use error::{Error, Result};

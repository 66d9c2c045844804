//! Download module for the fetch-and-download pipeline.
//!
//! This module provides:
//! - Per-page listing retrieval with bounded retry
//! - Photo downloading with bounded retry
//! - Pipeline orchestration and completion tracking
//! - Structured run outcomes

pub mod pages;
pub mod photo;
pub mod pipeline;
pub mod report;

pub use pages::fetch_page_with_retry;
pub use photo::download_house_photo;
pub use pipeline::run_pipeline;
pub use report::{DownloadOutcome, PageOutcome, PageResolution, RunReport};

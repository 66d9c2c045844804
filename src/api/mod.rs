//! Listing API module.
//!
//! This module provides:
//! - HTTP client for the house listing API
//! - Serde types for listing responses

pub mod client;
pub mod types;

pub use client::HouseApi;
pub use types::{House, ListingPage};

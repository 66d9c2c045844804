//! Filesystem module.
//!
//! Provides:
//! - Output directory management
//! - Deterministic photo filename derivation

pub mod naming;
pub mod paths;

pub use naming::{photo_extension, photo_filename, sanitize_filename};
pub use paths::ensure_dir;

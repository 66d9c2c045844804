//! Output directory management.

use std::path::Path;

use crate::error::Result;

/// Ensure the output directory exists, creating it if necessary.
///
/// Idempotent: an already-existing directory is fine. This is the one piece
/// of setup whose failure is fatal for the run.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_creates_and_tolerates_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("photos");

        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // second call is a no-op
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_dir_fails_when_blocked_by_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("photos");
        std::fs::write(&blocker, b"not a directory").unwrap();

        assert!(ensure_dir(&blocker).is_err());
    }
}

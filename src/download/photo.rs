//! Photo downloading with bounded retry.

use std::path::Path;
use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::api::{House, HouseApi};
use crate::download::report::DownloadOutcome;
use crate::fs::photo_filename;

/// Download one house's photo into `output_dir`.
///
/// The full body is read into memory, then written in one shot to the
/// deterministic path derived from the record. Fetch failures are retried
/// up to the attempt budget with a fixed backoff; write failures are not
/// retried. Never returns an error: the outcome carries success or the
/// reason the record was abandoned.
pub async fn download_house_photo(
    api: &HouseApi,
    house: &House,
    output_dir: &Path,
    max_attempts: u32,
    retry_delay: Duration,
    cancel: &CancellationToken,
) -> DownloadOutcome {
    let filename = match photo_filename(house) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(
                "Cannot derive a filename for house {} ({}): {}",
                house.id,
                house.address,
                e
            );
            return DownloadOutcome::failure(house.id, e.to_string());
        }
    };
    let path = output_dir.join(&filename);

    for attempt in 1..=max_attempts {
        if attempt > 1 {
            tokio::select! {
                _ = sleep(retry_delay) => {}
                _ = cancel.cancelled() => {
                    return DownloadOutcome::failure(house.id, "cancelled before completion");
                }
            }
        }

        if cancel.is_cancelled() {
            return DownloadOutcome::failure(house.id, "cancelled before completion");
        }

        match api.fetch_photo(&house.photo_url).await {
            Ok(bytes) => {
                let len = bytes.len() as u64;
                return match tokio::fs::write(&path, &bytes).await {
                    Ok(()) => {
                        tracing::debug!("Downloaded {} ({} bytes)", path.display(), len);
                        DownloadOutcome::success(house.id, len)
                    }
                    Err(e) => {
                        // write errors are terminal for the record
                        tracing::warn!("Failed to write {}: {}", path.display(), e);
                        DownloadOutcome::failure(house.id, format!("write failed: {}", e))
                    }
                };
            }
            Err(e) => {
                tracing::debug!(
                    "Photo fetch for house {} failed (attempt {}/{}): {}",
                    house.id,
                    attempt,
                    max_attempts,
                    e
                );
                if attempt == max_attempts {
                    tracing::warn!(
                        "Giving up on photo for house {} ({}): {}",
                        house.id,
                        house.photo_url,
                        e
                    );
                    return DownloadOutcome::failure(house.id, e.to_string());
                }
            }
        }
    }

    // max_attempts >= 1 is enforced by config validation
    DownloadOutcome::failure(house.id, "no attempts made")
}

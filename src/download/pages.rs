//! Per-page listing retrieval with bounded retry.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::api::{House, HouseApi};
use crate::download::report::{PageOutcome, PageResolution};
use crate::error::Error;

/// Drive one page to resolution: ready, exhausted, failed, or cancelled.
///
/// An iterative loop rather than re-submission, so stack depth stays flat
/// no matter how many attempts the budget allows. Each not-ready response
/// or transport error costs one attempt and a fixed backoff sleep; a
/// malformed body fails the page on the spot.
pub async fn fetch_page_with_retry(
    api: &HouseApi,
    page: u32,
    max_attempts: u32,
    retry_delay: Duration,
    records: UnboundedSender<House>,
    cancel: CancellationToken,
) -> PageOutcome {
    let mut last_error: Option<Error> = None;

    for attempt in 1..=max_attempts {
        if attempt > 1 {
            tokio::select! {
                _ = sleep(retry_delay) => {}
                _ = cancel.cancelled() => {
                    return PageOutcome {
                        page,
                        resolution: PageResolution::Cancelled,
                    };
                }
            }
        }

        if cancel.is_cancelled() {
            return PageOutcome {
                page,
                resolution: PageResolution::Cancelled,
            };
        }

        match api.get_page(page).await {
            Ok(listing) if listing.ok => {
                let count = listing.houses.len();
                for house in listing.houses {
                    // A closed receiver means the orchestrator is gone.
                    if records.send(house).is_err() {
                        return PageOutcome {
                            page,
                            resolution: PageResolution::Cancelled,
                        };
                    }
                }
                tracing::debug!("Page {} ready with {} records", page, count);
                return PageOutcome {
                    page,
                    resolution: PageResolution::Ready { records: count },
                };
            }
            Ok(_) => {
                tracing::debug!(
                    "Page {} not ready (attempt {}/{})",
                    page,
                    attempt,
                    max_attempts
                );
                last_error = None;
            }
            Err(e) if !e.is_retryable() => {
                tracing::warn!("Page {} returned a malformed listing body: {}", page, e);
                return PageOutcome {
                    page,
                    resolution: PageResolution::Failed {
                        attempts: attempt,
                        error: e.to_string(),
                    },
                };
            }
            Err(e) => {
                tracing::debug!(
                    "Page {} fetch failed (attempt {}/{}): {}",
                    page,
                    attempt,
                    max_attempts,
                    e
                );
                last_error = Some(e);
            }
        }
    }

    match &last_error {
        Some(e) => tracing::warn!(
            "Giving up on page {} after {} attempts: {}",
            page,
            max_attempts,
            e
        ),
        None => tracing::warn!(
            "Giving up on page {} after {} attempts: page never became ready",
            page,
            max_attempts
        ),
    }

    PageOutcome {
        page,
        resolution: PageResolution::Exhausted {
            attempts: max_attempts,
        },
    }
}

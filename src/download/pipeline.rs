//! Pipeline orchestration.
//!
//! Fans out one retry task per page and one download task per discovered
//! record, then joins everything before reporting. Completion counts all
//! dynamically created work: the record channel closes only once every
//! page task has finished emitting, and both join sets are drained to the
//! end.

use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::api::{House, HouseApi};
use crate::config::RunConfig;
use crate::download::pages::fetch_page_with_retry;
use crate::download::photo::download_house_photo;
use crate::download::report::{DownloadOutcome, PageOutcome, RunReport};
use crate::error::Result;
use crate::fs::ensure_dir;
use crate::output::create_download_bar;

/// Run the whole batch: fetch every page, download every discovered photo.
///
/// The only fatal error is failing to set up the output directory; every
/// per-page and per-record failure is folded into the returned report.
pub async fn run_pipeline(config: &RunConfig, cancel: CancellationToken) -> Result<RunReport> {
    ensure_dir(&config.output_dir)?;

    let api = Arc::new(HouseApi::new(config.base_url.clone())?);
    let (tx, mut rx) = mpsc::unbounded_channel::<House>();

    tracing::info!(
        "Fetching {} listing page(s) from {}",
        config.pages,
        config.base_url
    );

    let mut page_tasks: JoinSet<PageOutcome> = JoinSet::new();
    for page in 1..=config.pages {
        let api = Arc::clone(&api);
        let tx = tx.clone();
        let cancel = cancel.clone();
        let max_attempts = config.max_attempts;
        let retry_delay = config.retry_delay;
        page_tasks.spawn(async move {
            fetch_page_with_retry(&api, page, max_attempts, retry_delay, tx, cancel).await
        });
    }
    // Only the page tasks hold senders now; the channel closes when the
    // last of them finishes.
    drop(tx);

    let limiter = config
        .max_concurrent_downloads
        .map(|n| Arc::new(Semaphore::new(n)));
    let progress = if config.quiet {
        None
    } else {
        Some(create_download_bar())
    };

    let mut download_tasks: JoinSet<DownloadOutcome> = JoinSet::new();
    while let Some(house) = rx.recv().await {
        if let Some(pb) = &progress {
            pb.inc_length(1);
        }

        let api = Arc::clone(&api);
        let output_dir = config.output_dir.clone();
        let cancel = cancel.clone();
        let limiter = limiter.clone();
        let pb = progress.clone();
        let max_attempts = config.max_attempts;
        let retry_delay = config.retry_delay;

        download_tasks.spawn(async move {
            let _permit = match limiter {
                Some(sem) => sem.acquire_owned().await.ok(),
                None => None,
            };

            let outcome =
                download_house_photo(&api, &house, &output_dir, max_attempts, retry_delay, &cancel)
                    .await;

            if let Some(pb) = pb {
                pb.inc(1);
            }
            outcome
        });
    }

    let mut report = RunReport::default();

    // Channel closed: every page task is done emitting. Join them for
    // their outcomes, then wait out the downloads.
    while let Some(joined) = page_tasks.join_next().await {
        match joined {
            Ok(outcome) => report.add_page_outcome(&outcome),
            Err(e) => tracing::error!("Page task panicked: {}", e),
        }
    }

    while let Some(joined) = download_tasks.join_next().await {
        match joined {
            Ok(outcome) => report.add_download_outcome(&outcome),
            Err(e) => tracing::error!("Download task panicked: {}", e),
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(report)
}

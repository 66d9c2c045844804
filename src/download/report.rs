//! Structured run outcomes.
//!
//! Every page and every download resolves to an outcome value the
//! orchestrator accumulates, so callers and tests can assert on results
//! instead of scraping log text.

/// How a page's retry loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResolution {
    /// The page returned `ok == true`; all its records were emitted.
    Ready { records: usize },
    /// The attempt budget ran out; the page's records are lost for this run.
    Exhausted { attempts: u32 },
    /// A non-retryable error (malformed listing body) failed the page.
    Failed { attempts: u32, error: String },
    /// Cancellation was observed before the page resolved.
    Cancelled,
}

/// Terminal outcome of one page's retry loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    pub page: u32,
    pub resolution: PageResolution,
}

/// Terminal outcome of one photo download.
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub house_id: i64,
    pub bytes_written: u64,
    pub error: Option<String>,
}

impl DownloadOutcome {
    pub fn success(house_id: i64, bytes_written: u64) -> Self {
        Self {
            house_id,
            bytes_written,
            error: None,
        }
    }

    pub fn failure(house_id: i64, error: impl Into<String>) -> Self {
        Self {
            house_id,
            bytes_written: 0,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate statistics for one batch run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub pages_ready: u64,
    pub pages_exhausted: u64,
    pub pages_failed: u64,
    pub pages_cancelled: u64,
    pub records_discovered: u64,
    pub downloads_succeeded: u64,
    pub downloads_failed: u64,
    pub bytes_written: u64,
}

impl RunReport {
    /// Fold one page outcome into the report.
    pub fn add_page_outcome(&mut self, outcome: &PageOutcome) {
        match &outcome.resolution {
            PageResolution::Ready { records } => {
                self.pages_ready += 1;
                self.records_discovered += *records as u64;
            }
            PageResolution::Exhausted { .. } => self.pages_exhausted += 1,
            PageResolution::Failed { .. } => self.pages_failed += 1,
            PageResolution::Cancelled => self.pages_cancelled += 1,
        }
    }

    /// Fold one download outcome into the report.
    pub fn add_download_outcome(&mut self, outcome: &DownloadOutcome) {
        if outcome.is_success() {
            self.downloads_succeeded += 1;
            self.bytes_written += outcome.bytes_written;
        } else {
            self.downloads_failed += 1;
        }
    }

    /// Whether every page resolved ready and every download succeeded.
    pub fn is_clean(&self) -> bool {
        self.pages_exhausted == 0
            && self.pages_failed == 0
            && self.pages_cancelled == 0
            && self.downloads_failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_outcome_accumulation() {
        let mut report = RunReport::default();

        report.add_page_outcome(&PageOutcome {
            page: 1,
            resolution: PageResolution::Ready { records: 3 },
        });
        report.add_page_outcome(&PageOutcome {
            page: 2,
            resolution: PageResolution::Exhausted { attempts: 5 },
        });
        report.add_page_outcome(&PageOutcome {
            page: 3,
            resolution: PageResolution::Failed {
                attempts: 1,
                error: "bad body".into(),
            },
        });

        assert_eq!(report.pages_ready, 1);
        assert_eq!(report.pages_exhausted, 1);
        assert_eq!(report.pages_failed, 1);
        assert_eq!(report.records_discovered, 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_download_outcome_accumulation() {
        let mut report = RunReport::default();

        report.add_download_outcome(&DownloadOutcome::success(1, 1024));
        report.add_download_outcome(&DownloadOutcome::success(2, 2048));
        report.add_download_outcome(&DownloadOutcome::failure(3, "HTTP 500"));

        assert_eq!(report.downloads_succeeded, 2);
        assert_eq!(report.downloads_failed, 1);
        assert_eq!(report.bytes_written, 3072);
    }

    #[test]
    fn test_clean_report() {
        let mut report = RunReport::default();
        report.add_page_outcome(&PageOutcome {
            page: 1,
            resolution: PageResolution::Ready { records: 1 },
        });
        report.add_download_outcome(&DownloadOutcome::success(1, 10));
        assert!(report.is_clean());
    }
}

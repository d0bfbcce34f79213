use std::fmt::Display;

use chrono::{DateTime, Utc};

/// The outcome of a single scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// The time at which the scan started.
    pub started_at: DateTime<Utc>,

    /// The number of listings returned by the API.
    pub total_fetched: u32,

    /// The number of listings matching the relevance keywords.
    pub total_relevant: u32,

    /// The number of relevant listings repeated within the same batch.
    pub total_batch_duplicates: u32,

    /// The number of relevant listings that were already notified in a previous run.
    pub total_already_seen: u32,

    /// The number of listings included in the sent digest.
    pub total_notified: u32,
}

impl ScanReport {
    /// Creates an empty `ScanReport` starting at the given time.
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            total_fetched: 0,
            total_relevant: 0,
            total_batch_duplicates: 0,
            total_already_seen: 0,
            total_notified: 0,
        }
    }

    /// Checks whether a digest was sent.
    pub fn has_notified(&self) -> bool {
        self.total_notified > 0
    }
}

impl Display for ScanReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Listings: fetched={}, relevant={}, batch_duplicates={}, already_seen={}, notified={}, started_at={}",
            self.total_fetched,
            self.total_relevant,
            self.total_batch_duplicates,
            self.total_already_seen,
            self.total_notified,
            self.started_at.to_rfc3339()
        )
    }
}

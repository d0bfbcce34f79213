use crate::{ScanReport, SearchRequest, StdResult};

/// A trait for scanning the job-listing API and notifying new relevant listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait JobScanner {
    /// Runs one scan for the request.
    async fn scan(&self, request: &SearchRequest) -> StdResult<ScanReport>;
}

use crate::{JobListing, ListingKey, StdResult};

/// A trait for tracking which listings have already been notified.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SeenListingStore: Sync + Send {
    /// Checks whether the listing key has never been recorded.
    async fn is_new(&self, key: &ListingKey) -> StdResult<bool>;

    /// Records the listings as seen and returns the number of keys newly recorded.
    async fn mark_seen(&self, listings: &[JobListing]) -> StdResult<u32>;
}

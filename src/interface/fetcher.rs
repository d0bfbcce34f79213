use crate::{RawListing, SearchRequest, StdResult};

/// A trait for fetching job listings from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ListingFetcher: Sync + Send {
    /// Fetches the listings matching the request.
    ///
    /// Returns `None` when the API answered with a non-success status.
    async fn fetch(&self, request: &SearchRequest) -> StdResult<Option<Vec<RawListing>>>;
}

use std::fmt::Display;

use rand::Rng;
use serde::Serialize;

/// The largest offset used when picking a random start position.
pub const DEFAULT_MAX_START: u32 = 250;

/// A listing search request being made to the job-listing API
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Hash)]
pub struct SearchRequest {
    /// The search keyword.
    pub(crate) keyword: String,

    /// The location filter.
    pub(crate) location: String,

    /// The offset of the first listing returned.
    pub(crate) start: u32,
}

impl SearchRequest {
    /// Creates a new `SearchRequest` with the given keyword, location and start values.
    pub fn new(keyword: &str, location: &str, start: u32) -> Self {
        Self {
            keyword: keyword.to_string(),
            location: location.to_string(),
            start,
        }
    }

    /// Creates a new `SearchRequest` whose start is drawn uniformly from `0..=max_start`.
    pub fn with_random_start<R: Rng + ?Sized>(
        keyword: &str,
        location: &str,
        max_start: u32,
        rng: &mut R,
    ) -> Self {
        Self::new(keyword, location, rng.random_range(0..=max_start))
    }

    /// Retrieves the search keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Retrieves the location filter.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Retrieves the start offset.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Creates a dummy `SearchRequest` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self::new("Software Engineer", "Remote", 0)
    }
}

impl Display for SearchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchRequest: keyword={}, location={}, start={}",
            self.keyword, self.location, self.start
        )
    }
}

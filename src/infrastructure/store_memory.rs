use std::collections::HashSet;

use tokio::sync::RwLock;

use crate::{JobListing, ListingKey, SeenListingStore, StdResult};

/// A seen listing store that only lives as long as the process.
#[derive(Debug, Default)]
pub struct InMemorySeenStore {
    keys: RwLock<HashSet<ListingKey>>,
}

impl InMemorySeenStore {
    /// Creates a new empty `InMemorySeenStore` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves the number of recorded keys.
    pub async fn len(&self) -> usize {
        self.keys.read().await.len()
    }
}

#[async_trait::async_trait]
impl SeenListingStore for InMemorySeenStore {
    async fn is_new(&self, key: &ListingKey) -> StdResult<bool> {
        let keys = self.keys.read().await;

        Ok(!(*keys).contains(key))
    }

    async fn mark_seen(&self, listings: &[JobListing]) -> StdResult<u32> {
        let mut keys = self.keys.write().await;
        let total_inserted = listings
            .iter()
            .filter(|listing| (*keys).insert(listing.key()))
            .count();

        Ok(total_inserted as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_key_is_new() {
        let store = InMemorySeenStore::new();

        let result = store
            .is_new(&ListingKey::new("python developer", "2024-01-01"))
            .await
            .unwrap();

        assert!(result);
    }

    #[tokio::test]
    async fn recorded_key_is_not_new() {
        let store = InMemorySeenStore::new();
        store
            .mark_seen(&[JobListing::new("Python Developer", "", "http://a", "2024-01-01")])
            .await
            .unwrap();

        let result = store
            .is_new(&ListingKey::new("python developer", "2024-01-01"))
            .await
            .unwrap();

        assert!(!result);
    }

    #[tokio::test]
    async fn same_title_with_other_date_is_new() {
        let store = InMemorySeenStore::new();
        store
            .mark_seen(&[JobListing::new("Python Developer", "", "http://a", "2024-01-01")])
            .await
            .unwrap();

        let result = store
            .is_new(&ListingKey::new("python developer", "2024-01-02"))
            .await
            .unwrap();

        assert!(result);
    }

    #[tokio::test]
    async fn mark_seen_counts_only_newly_recorded_keys() {
        let store = InMemorySeenStore::new();
        let listings = vec![
            JobListing::new("Python Developer", "", "http://a", "2024-01-01"),
            JobListing::new("AWS Engineer", "", "http://b", "2024-01-01"),
        ];

        let first_total = store.mark_seen(&listings).await.unwrap();
        let second_total = store.mark_seen(&listings).await.unwrap();

        assert_eq!(2, first_total);
        assert_eq!(0, second_total);
        assert_eq!(2, store.len().await);
    }
}

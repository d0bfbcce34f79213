use std::{collections::HashSet, sync::Arc};

use chrono::Utc;
use log::{debug, info, warn};

use crate::{
    Digest, DigestNotifier, JobListing, JobScanner, ListingFetcher, RawListing,
    RelevanceKeywords, ScanReport, SearchRequest, SeenListingStore, StdResult,
};

/// A scanner that fetches one page of listings and notifies the new relevant ones
pub struct SequentialScanner {
    fetcher: Arc<dyn ListingFetcher>,
    store: Arc<dyn SeenListingStore>,
    notifier: Arc<dyn DigestNotifier>,
    keywords: RelevanceKeywords,
}

impl SequentialScanner {
    /// Creates a new `SequentialScanner` instance with the given collaborators.
    pub fn new(
        fetcher: Arc<dyn ListingFetcher>,
        store: Arc<dyn SeenListingStore>,
        notifier: Arc<dyn DigestNotifier>,
        keywords: RelevanceKeywords,
    ) -> Self {
        Self {
            fetcher,
            store,
            notifier,
            keywords,
        }
    }

    /// Keeps the relevant listings that were neither repeated earlier in the batch nor seen in a previous run.
    async fn select_new_listings(
        &self,
        raw_listings: &[RawListing],
        report: &mut ScanReport,
    ) -> StdResult<Vec<JobListing>> {
        let mut keys_in_batch = HashSet::new();
        let mut new_listings = Vec::new();
        for raw_listing in raw_listings {
            if !self
                .keywords
                .is_relevant(&raw_listing.title, &raw_listing.description)
            {
                debug!("Skipped irrelevant listing: {}", raw_listing.title);
                continue;
            }
            report.total_relevant += 1;

            let listing = JobListing::from(raw_listing);
            let key = listing.key();
            if !keys_in_batch.insert(key.clone()) {
                debug!("Skipped listing repeated in batch: {key}");
                report.total_batch_duplicates += 1;
                continue;
            }
            if !self.store.is_new(&key).await? {
                debug!("Skipped already seen listing: {key}");
                report.total_already_seen += 1;
                continue;
            }
            info!("Found new listing: {listing}");
            new_listings.push(listing);
        }

        Ok(new_listings)
    }
}

#[async_trait::async_trait]
impl JobScanner for SequentialScanner {
    async fn scan(&self, request: &SearchRequest) -> StdResult<ScanReport> {
        let mut report = ScanReport::new(Utc::now());
        info!("Processing request: {request}");
        let raw_listings = self.fetcher.fetch(request).await?.unwrap_or_default();
        report.total_fetched = raw_listings.len() as u32;

        let new_listings = self.select_new_listings(&raw_listings, &mut report).await?;
        if new_listings.is_empty() {
            info!("No relevant jobs found.");
            return Ok(report);
        }

        let digest = Digest::try_new(new_listings)?;
        self.notifier.notify(&digest).await?;
        report.total_notified = digest.listings().len() as u32;

        let total_recorded = self.store.mark_seen(digest.listings()).await?;
        if total_recorded < report.total_notified {
            warn!(
                "Recorded fewer listings than notified: recorded={total_recorded}, notified={}",
                report.total_notified
            );
        }

        Ok(report)
    }
}

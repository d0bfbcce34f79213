use anyhow::Context;
use log::{error, info};
use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use thiserror::Error;

use crate::{ListingFetcher, ListingsPage, RawListing, SearchRequest, StdResult};

/// The production endpoint of the HasData Indeed listing API.
pub const HASDATA_LISTING_ENDPOINT: &str = "https://api.hasdata.com/scrape/indeed/listing";

const API_KEY_HEADER: &str = "x-api-key";

/// Fetcher error
#[derive(Error, Debug)]
pub enum FetcherError {
    /// Invalid API key
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),
    /// Parse error
    #[error("Parsing error: {0}")]
    Parse(String),
    /// Remote error
    #[error("Remote error: {0}")]
    Remote(String),
}

/// Fetches job listings from the HasData REST API.
pub struct HasDataFetcher {
    client: Client,
    endpoint: String,
}

impl HasDataFetcher {
    /// Creates a new `HasDataFetcher` instance authenticated with the given API key.
    pub fn try_new(endpoint: &str, api_key: &str) -> StdResult<Self> {
        let mut api_key_value = HeaderValue::from_str(api_key)
            .map_err(|e| FetcherError::InvalidApiKey(e.to_string()))?;
        api_key_value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ListingFetcher for HasDataFetcher {
    async fn fetch(&self, request: &SearchRequest) -> StdResult<Option<Vec<RawListing>>> {
        let start = request.start().to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("keyword", request.keyword()),
                ("location", request.location()),
                ("start", start.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetcherError::Remote(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status code {}: {body}", status.as_u16());
            return Ok(None);
        }

        let page = response
            .json::<ListingsPage>()
            .await
            .map_err(|e| FetcherError::Parse(e.to_string()))?;
        info!("Fetched {} listings for {request}", page.jobs.len());

        Ok(Some(page.jobs))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;

    fn mock_json_value() -> serde_json::Value {
        json!({
            "requestMetadata": {
                "status": "ok"
            },
            "jobs": [
                {
                    "title": "Python Developer",
                    "description": "Work with Django",
                    "url": "http://example.com/1",
                    "isoDate": "2024-01-01"
                },
                {
                    "title": "Marketing",
                    "description": "Not relevant",
                    "url": "http://example.com/2",
                    "isoDate": "2024-01-02",
                    "company": "Acme"
                }
            ]
        })
    }

    #[tokio::test]
    async fn fetch_sends_search_parameters_and_api_key() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/scrape/indeed/listing")
                .query_param("keyword", "Software Engineer")
                .query_param("location", "Remote")
                .query_param("start", "42")
                .header("x-api-key", "secret")
                .header("content-type", "application/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_json_value());
        });
        let fetcher =
            HasDataFetcher::try_new(&server.url("/scrape/indeed/listing"), "secret").unwrap();
        let request = SearchRequest::new("Software Engineer", "Remote", 42);

        let listings = fetcher.fetch(&request).await.unwrap().unwrap();

        mock.assert();
        assert_eq!(
            vec![
                RawListing::new(
                    "Python Developer",
                    "Work with Django",
                    "http://example.com/1",
                    "2024-01-01"
                ),
                RawListing::new(
                    "Marketing",
                    "Not relevant",
                    "http://example.com/2",
                    "2024-01-02"
                ),
            ],
            listings
        );
    }

    #[tokio::test]
    async fn fetch_returns_empty_listings_when_jobs_are_missing() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "requestMetadata": { "status": "ok" } }));
        });
        let fetcher = HasDataFetcher::try_new(&server.url("/"), "secret").unwrap();

        let listings = fetcher
            .fetch(&SearchRequest::dummy())
            .await
            .unwrap()
            .unwrap();

        mock.assert();
        assert!(listings.is_empty());
    }

    #[tokio::test]
    async fn fetch_returns_none_on_non_success_status() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/");
            then.status(500).body("internal error");
        });
        let fetcher = HasDataFetcher::try_new(&server.url("/"), "secret").unwrap();

        let listings = fetcher.fetch(&SearchRequest::dummy()).await.unwrap();

        mock.assert();
        assert_eq!(None, listings);
    }

    #[tokio::test]
    async fn fetch_fails_on_malformed_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json");
        });
        let fetcher = HasDataFetcher::try_new(&server.url("/"), "secret").unwrap();

        fetcher
            .fetch(&SearchRequest::dummy())
            .await
            .expect_err("Expected a parsing error");

        mock.assert();
    }

    #[test]
    fn try_new_fails_on_invalid_api_key() {
        HasDataFetcher::try_new(HASDATA_LISTING_ENDPOINT, "bad\nkey")
            .err()
            .expect("Expected an invalid API key error");
    }
}

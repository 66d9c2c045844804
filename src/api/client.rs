//! Listing API HTTP client.

use bytes::Bytes;
use reqwest::Client;

use crate::api::types::ListingPage;
use crate::error::{Error, Result};

/// HTTP client for the house listing API and its photo URLs.
pub struct HouseApi {
    client: Client,
    base_url: String,
}

impl HouseApi {
    /// Create a new API client for the given listing base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch a single listing page. One attempt, no retry; retry policy
    /// belongs to the caller.
    pub async fn get_page(&self, page: u32) -> Result<ListingPage> {
        tracing::debug!("GET {}?page={}", self.base_url, page);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("page", page)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Page {} response status: {}", page, status);

        if !status.is_success() {
            return Err(Error::Api(format!(
                "Listing request for page {} failed: HTTP {}",
                page, status
            )));
        }

        let text = response.text().await?;
        let listing: ListingPage = serde_json::from_str(&text)?;
        Ok(listing)
    }

    /// Fetch a photo, reading the full body into memory.
    pub async fn fetch_photo(&self, url: &str) -> Result<Bytes> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to fetch photo: HTTP {}",
                response.status()
            )));
        }

        Ok(response.bytes().await?)
    }
}

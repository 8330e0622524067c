//! HTTP client for the catalogue site.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// HTTP client for listing and detail pages.
///
/// Wraps one `reqwest::Client` with a configured timeout and fixed
/// `User-Agent`, shared across every request of a crawl so transport state
/// (connection pooling, keep-alive) is reused — the crawl issues one
/// retrieval per item on top of one per page, so reuse matters.
pub struct CatalogueClient {
    client: Client,
    base_url: String,
}

impl CatalogueClient {
    /// Creates a `CatalogueClient` with configured timeout and `User-Agent`.
    ///
    /// `base_url` is the site root (e.g. `https://books.toscrape.com/`);
    /// a trailing slash is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Catalogue root under the base URL. Listing pages and the detail
    /// pages they link to both live under this path.
    #[must_use]
    pub fn catalogue_url(&self) -> String {
        format!("{}/catalogue/", self.base_url)
    }

    /// Address of the 1-indexed listing page `page`.
    fn listing_url(&self, page: u32) -> String {
        format!("{}page-{page}.html", self.catalogue_url())
    }

    /// Fetches one listing page body.
    ///
    /// Returns `Ok(None)` on any non-2xx status: the site publishes no page
    /// count, so the first missing page marks the end of the catalogue
    /// rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] on a network or transport failure.
    pub async fn fetch_listing(&self, page: u32) -> Result<Option<String>, ScraperError> {
        let url = self.listing_url(page);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            tracing::debug!(
                page,
                status = %response.status(),
                "listing page not available; treating as end of catalogue"
            );
            return Ok(None);
        }
        let body = response.text().await?;
        Ok(Some(body))
    }

    /// Fetches an arbitrary page body over the shared connection.
    ///
    /// The status code is deliberately not checked: detail parsing treats a
    /// body without the attributes table as complete-but-empty, which
    /// covers error pages as well.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] on a network or transport failure.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

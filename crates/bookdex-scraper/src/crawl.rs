//! Sequential pagination crawl over the catalogue.
//!
//! One task, strictly ordered fetches: every listing page and every
//! per-item detail retrieval is awaited one after another, so crawl
//! duration scales linearly with page count × items per page. Sequential
//! fetching is a deliberate simplicity/politeness trade-off versus
//! concurrent fetches, which would need rate limiting and connection-pool
//! sizing decisions.

use std::time::Duration;

use bookdex_core::CatalogueRecord;

use crate::client::CatalogueClient;
use crate::detail;
use crate::error::ScraperError;
use crate::extract;
use crate::normalize;

/// Lazy cursor over the catalogue's listing pages, ascending from page 1.
///
/// The sequence is finite and non-restartable: the first non-2xx listing
/// response makes the cursor terminal, and it keeps yielding `None` from
/// then on. The site publishes no page count, so the terminal value is the
/// only way the sequence ends.
pub struct ListingPages {
    page: u32,
    done: bool,
}

impl ListingPages {
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 1,
            done: false,
        }
    }

    /// Fetches the next listing page body, or `None` once the end of the
    /// catalogue has been reached.
    ///
    /// # Errors
    ///
    /// Propagates [`ScraperError::Http`] on transport failure. A non-2xx
    /// status is the terminal value, not an error.
    pub async fn next_page(
        &mut self,
        client: &CatalogueClient,
    ) -> Result<Option<ListingPage>, ScraperError> {
        if self.done {
            return Ok(None);
        }
        let number = self.page;
        match client.fetch_listing(number).await? {
            Some(html) => {
                self.page += 1;
                Ok(Some(ListingPage { number, html }))
            }
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }
}

impl Default for ListingPages {
    fn default() -> Self {
        Self::new()
    }
}

/// One successfully retrieved listing page.
pub struct ListingPage {
    pub number: u32,
    pub html: String,
}

/// Crawls the whole catalogue: every listing page in ascending order, every
/// entry's detail page, one record per entry in discovery order.
///
/// The crawl ends at the first listing page that is missing (non-2xx) or
/// has zero entries — both are the catalogue's natural end, not errors.
///
/// Takes ownership of the shared client for the crawl's lifetime: the
/// detail fetcher borrows it per call, and it is released on every exit
/// path, early termination included.
///
/// `inter_request_delay_ms` is a politeness delay between listing-page
/// requests (applied before every page except the first).
///
/// **All-or-nothing semantics**: a transport failure or malformed listing
/// entry anywhere mid-crawl aborts the crawl and discards earlier records —
/// a partial catalogue handed to consumers would silently masquerade as a
/// complete one.
///
/// # Errors
///
/// Propagates [`ScraperError::Http`] (transport failure on any fetch) and
/// [`ScraperError::MissingElement`] (malformed listing markup).
pub async fn crawl_catalogue(
    client: CatalogueClient,
    inter_request_delay_ms: u64,
) -> Result<Vec<CatalogueRecord>, ScraperError> {
    let catalogue_url = client.catalogue_url();
    let mut records: Vec<CatalogueRecord> = Vec::new();
    let mut pages = ListingPages::new();
    let mut is_first_page = true;

    loop {
        if !is_first_page && inter_request_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
        }
        is_first_page = false;

        let Some(page) = pages.next_page(&client).await? else {
            break;
        };

        let summaries = extract::extract_listing(&page.html, &catalogue_url)?;
        if summaries.is_empty() {
            tracing::debug!(page = page.number, "listing page has no entries; ending crawl");
            break;
        }
        tracing::debug!(
            page = page.number,
            entries = summaries.len(),
            "scanned listing page"
        );

        for summary in summaries {
            let detail = detail::fetch_detail(&client, &summary.detail_url).await?;
            records.push(normalize::build_record(summary, detail));
        }
    }

    tracing::info!(records = records.len(), "catalogue crawl complete");
    Ok(records)
}

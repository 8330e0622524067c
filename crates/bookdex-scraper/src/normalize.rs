//! Assembly of crawl output records from raw scrape shapes.

use bookdex_core::{BookDetail, CatalogueRecord};

use crate::types::BookSummary;

/// Merges a listing summary and its detail attributes into the flat
/// [`CatalogueRecord`] handed to consumers.
#[must_use]
pub fn build_record(summary: BookSummary, detail: BookDetail) -> CatalogueRecord {
    CatalogueRecord {
        name: summary.name,
        rating: summary.rating,
        price: summary.price,
        url: summary.detail_url,
        detail,
    }
}

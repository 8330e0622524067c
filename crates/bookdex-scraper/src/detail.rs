//! Detail-page retrieval and parsing.

use scraper::Html;

use bookdex_core::BookDetail;

use crate::client::CatalogueClient;
use crate::error::ScraperError;
use crate::extract::selector;

/// Fetches and parses one item's detail page over the caller's shared client.
///
/// # Errors
///
/// Returns [`ScraperError::Http`] on a network or transport failure. Errors
/// are not retried or recovered here; the crawl loop decides what a failure
/// means for the run.
pub async fn fetch_detail(
    client: &CatalogueClient,
    url: &str,
) -> Result<BookDetail, ScraperError> {
    let html = client.fetch_page(url).await?;
    Ok(parse_detail(&html))
}

/// Parses the attributes table of a detail page.
///
/// Starts from the complete-but-empty [`BookDetail`] and overwrites fields
/// row by row: the header cell (lower-cased, trimmed) picks the field, the
/// paired data cell (trimmed) is the value. Unrecognized headers are
/// ignored, and a page without the table yields the all-empty detail —
/// neither is an error. Every returned detail therefore carries the full
/// fixed field set.
#[must_use]
pub fn parse_detail(html: &str) -> BookDetail {
    let document = Html::parse_document(html);
    let table_sel = selector("table.table-striped");
    let row_sel = selector("tr");
    let header_sel = selector("th");
    let value_sel = selector("td");

    let mut detail = BookDetail::default();
    let Some(table) = document.select(&table_sel).next() else {
        return detail;
    };

    for row in table.select(&row_sel) {
        let Some(header) = row.select(&header_sel).next() else {
            continue;
        };
        let Some(value) = row.select(&value_sel).next() else {
            continue;
        };
        let key = header.text().collect::<String>().trim().to_lowercase();
        let value = value.text().collect::<String>().trim().to_owned();

        match key.as_str() {
            "upc" => detail.upc = value,
            "product type" => detail.product_type = value,
            "price (excl. tax)" => detail.price_excl_tax = value,
            "price (incl. tax)" => detail.price_incl_tax = value,
            "tax" => detail.tax = value,
            "availability" => detail.availability = value,
            "number of reviews" => detail.num_reviews = value,
            _ => {}
        }
    }

    detail
}

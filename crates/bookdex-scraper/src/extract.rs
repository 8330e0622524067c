//! Pure field extraction from listing-page markup.
//!
//! No side effects: everything here operates on already-fetched HTML. See
//! [`crate::detail`] for the per-item enrichment that does touch the network.

use scraper::{ElementRef, Html, Selector};

use bookdex_core::Rating;

use crate::error::ScraperError;
use crate::types::BookSummary;

/// Relative-path prefix the site's listing links carry; stripped before the
/// link is resolved against the catalogue base.
const LISTING_LINK_PREFIX: &str = "../../../";

/// Compiles one of the crate's fixed CSS selectors. Only ever called with
/// static strings, so a parse failure is a programmer error.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Extracts every listing entry on a page into summaries, in page order.
///
/// An empty result is a normal outcome (the caller treats it as the end of
/// the catalogue), not an error.
///
/// # Errors
///
/// Returns [`ScraperError::MissingElement`] if any entry lacks a required
/// element — malformed listing markup is fatal to the crawl invocation.
pub fn extract_listing(
    html: &str,
    catalogue_url: &str,
) -> Result<Vec<BookSummary>, ScraperError> {
    let document = Html::parse_document(html);
    let entry_sel = selector("article.product_pod");
    document
        .select(&entry_sel)
        .map(|entry| extract_summary(entry, catalogue_url))
        .collect()
}

/// Extracts the summary fields of one listing entry.
///
/// The title link is required with no fallback; the rating indicator is
/// optional and resolves to the `"None"` sentinel when absent.
///
/// # Errors
///
/// Returns [`ScraperError::MissingElement`] when the title link, its
/// `title` attribute, its `href`, or the price node is missing.
pub fn extract_summary(
    entry: ElementRef<'_>,
    catalogue_url: &str,
) -> Result<BookSummary, ScraperError> {
    let title_sel = selector("h3 a");
    let link = entry
        .select(&title_sel)
        .next()
        .ok_or_else(|| missing("h3 a"))?;
    let name = link
        .value()
        .attr("title")
        .ok_or_else(|| missing("h3 a[title]"))?
        .to_owned();
    let href = link
        .value()
        .attr("href")
        .ok_or_else(|| missing("h3 a[href]"))?;

    let price_sel = selector("p.price_color");
    let price_raw = entry
        .select(&price_sel)
        .next()
        .ok_or_else(|| missing("p.price_color"))?
        .text()
        .collect::<String>();

    Ok(BookSummary {
        name,
        rating: extract_rating(entry),
        price: scrub_price_artifacts(price_raw.trim()),
        detail_url: resolve_detail_url(href, catalogue_url),
    })
}

fn missing(selector: &str) -> ScraperError {
    ScraperError::MissingElement {
        selector: selector.to_owned(),
        context: "listing entry".to_owned(),
    }
}

/// Reads the rating indicator's second class token (e.g. `"Three"` in
/// `class="star-rating Three"`). Entries without an indicator get the
/// `"None"` sentinel, never an error.
fn extract_rating(entry: ElementRef<'_>) -> Rating {
    let rating_sel = selector("p.star-rating");
    entry
        .select(&rating_sel)
        .next()
        .and_then(|el| el.value().classes().find(|class| *class != "star-rating"))
        .map_or(Rating::Unknown, Rating::from_class_token)
}

/// Strips the stray `Â` mojibake character that corrupts the currency
/// symbol when pages are served with inconsistent encoding declarations.
/// The currency symbol itself is kept.
fn scrub_price_artifacts(raw: &str) -> String {
    raw.replace('Â', "")
}

/// Resolves a listing entry's relative detail link to an absolute address
/// under the catalogue base.
fn resolve_detail_url(href: &str, catalogue_url: &str) -> String {
    let relative = href.strip_prefix(LISTING_LINK_PREFIX).unwrap_or(href);
    format!("{catalogue_url}{relative}")
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;

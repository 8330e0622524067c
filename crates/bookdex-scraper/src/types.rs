//! Raw extraction shapes produced while scanning listing markup.

use bookdex_core::Rating;

/// Fields extractable directly from one listing entry, before its detail
/// page is visited. Created once per entry during a page scan; immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    pub name: String,
    pub rating: Rating,
    /// Currency-formatted display price, artifact-scrubbed.
    pub price: String,
    /// Absolute address of the entry's detail page.
    pub detail_url: String,
}

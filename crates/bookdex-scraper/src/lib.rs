pub mod client;
pub mod crawl;
pub mod detail;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod types;

pub use client::CatalogueClient;
pub use crawl::{crawl_catalogue, ListingPage, ListingPages};
pub use error::ScraperError;
pub use types::BookSummary;

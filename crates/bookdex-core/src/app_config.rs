/// Runtime configuration for the crawler and its consumers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the catalogue site, e.g. `https://books.toscrape.com/`.
    pub base_url: String,
    /// Fixed `User-Agent` header sent on every request.
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Politeness delay between listing-page requests. `0` disables it.
    pub inter_request_delay_ms: u64,
}

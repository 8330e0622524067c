use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("missing required element `{selector}` in {context}")]
    MissingElement { selector: String, context: String },
}

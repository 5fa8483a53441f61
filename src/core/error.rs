use thiserror::Error;

use crate::quote::QuoteField;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// An HTTP request failed below the status-code level (connect, timeout, body read)
    /// and was not eligible for a retry.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Every attempt in the retry budget ended without a success status.
    #[error("Failed to load page {url} after {attempts} attempts (last status: {})", fmt_status(.last_status))]
    FetchExhausted {
        /// How many requests were issued.
        attempts: u32,
        /// The page that was requested.
        url: String,
        /// Status of the final attempt, `None` if it never produced a response.
        last_status: Option<u16>,
    },

    /// The page loaded but one of the required nodes was not present.
    #[error("Required field missing from quote page: {field}")]
    Extraction {
        /// The first field whose selector matched nothing.
        field: QuoteField,
    },

    /// A CSS selector failed to compile.
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// The attempt budget must be at least one.
    #[error("max attempts must be at least 1")]
    InvalidAttempts,
}

fn fmt_status(status: &Option<u16>) -> String {
    status.map_or_else(|| "none".to_string(), |s| s.to_string())
}

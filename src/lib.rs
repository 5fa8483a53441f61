//! quote-scrape: blocking scraper for a single Yahoo Finance quote page.
//!
//! A [`QuoteFetcher`] requests the page with a bounded number of attempts and a
//! fixed pause between them, then reads price, previous close and market cap
//! off the markup by attribute selectors. The [`sequence`] module is an
//! unrelated `Vec` walkthrough that ships alongside it.

pub mod core;
pub mod quote;
pub mod sequence;

pub use crate::core::client::DEFAULT_SYMBOL;
pub use crate::core::{
    Backoff, HttpTransport, PageResponse, Pause, QuoteClient, QuoteClientBuilder, RetryConfig,
    ScrapeError, ThreadPause, Transport,
};
pub use quote::{
    FetchResult, FieldSelector, QuoteFetcher, QuoteField, QuoteSnapshot, extract_snapshot,
    select_text,
};

/// Installs a `fmt` subscriber on stderr filtered by `RUST_LOG`.
/// Does nothing if a global subscriber is already set.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

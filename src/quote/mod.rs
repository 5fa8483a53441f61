//! Scraping a single quote page into a [`QuoteSnapshot`].
//!
//! Internals are split into:
//! - `fetch`:  the bounded, fixed-delay request loop
//! - `scrape`: HTML parsing and attribute-selector extraction
//! - `debug`:  optional page dumps (`QUOTE_DEBUG=1`)

mod debug;
mod fetch;
mod model;
pub mod scrape;

pub use fetch::FetchResult;
pub use model::{QuoteField, QuoteSnapshot};
pub use scrape::extract_snapshot;
pub use scrape::selector::{FieldSelector, select_text};

use url::Url;

use crate::core::client::DEFAULT_SYMBOL;
use crate::core::{QuoteClient, ScrapeError};

/// Fetches one symbol's quote page and extracts price, previous close and market cap.
///
/// # Example
///
/// ```no_run
/// # use quote_scrape::{QuoteClient, QuoteFetcher};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = QuoteClient::default();
/// let snapshot = QuoteFetcher::apple(&client).fetch(3)?;
/// println!("{snapshot}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QuoteFetcher {
    client: QuoteClient,
    symbol: String,
}

impl QuoteFetcher {
    /// Creates a fetcher for `symbol`'s quote page.
    pub fn new(client: &QuoteClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    /// The fetcher for Apple Inc. (`AAPL`).
    pub fn apple(client: &QuoteClient) -> Self {
        Self::new(client, DEFAULT_SYMBOL)
    }

    /// The symbol whose page this fetcher requests.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The page this fetcher requests: `<base>/<symbol>?p=<symbol>`.
    ///
    /// # Errors
    /// Returns [`ScrapeError::Url`] if the symbol cannot be joined onto the base.
    pub fn url(&self) -> Result<Url, ScrapeError> {
        let mut url = self.client.base_quote().join(&self.symbol)?;
        url.query_pairs_mut().append_pair("p", &self.symbol);
        Ok(url)
    }

    /// Runs the request loop only, without extraction.
    ///
    /// # Errors
    /// Returns [`ScrapeError::InvalidAttempts`] when `max_attempts` is zero, and
    /// [`ScrapeError::Http`] for transport failures the retry policy does not cover.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub fn fetch_raw(&self, max_attempts: u32) -> Result<FetchResult, ScrapeError> {
        let url = self.url()?;
        fetch::fetch_page(&self.client, &url, max_attempts)
    }

    /// Fetches the page with up to `max_attempts` requests and extracts a snapshot.
    ///
    /// # Errors
    /// - [`ScrapeError::InvalidAttempts`] if `max_attempts` is zero (no request is made).
    /// - [`ScrapeError::FetchExhausted`] if no attempt returned `200`.
    /// - [`ScrapeError::Extraction`] if the page lacks one of the three fields.
    /// - [`ScrapeError::Http`] for transport failures the retry policy does not cover.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub fn fetch(&self, max_attempts: u32) -> Result<QuoteSnapshot, ScrapeError> {
        let body = self.fetch_raw(max_attempts)?.into_body()?;

        if debug::enabled() {
            let _ = debug::debug_dump_html(&self.symbol, &body);
        }

        extract_snapshot(&body)
    }

    /// [`fetch`](Self::fetch) with the client's configured attempt budget.
    ///
    /// # Errors
    /// Same as [`fetch`](Self::fetch).
    pub fn fetch_default(&self) -> Result<QuoteSnapshot, ScrapeError> {
        self.fetch(self.client.retry_config().max_attempts)
    }
}

//! Centralized constants for the default endpoint, symbol and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo quote HTML base (symbol is appended).
pub(crate) const DEFAULT_BASE_QUOTE: &str = "https://finance.yahoo.com/quote/";

/// The symbol whose quote page the fetcher targets unless told otherwise.
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Attempts made by `fetch_default` when no policy overrides it.
pub(crate) const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Pause between two consecutive attempts.
pub(crate) const DEFAULT_RETRY_DELAY: std::time::Duration = std::time::Duration::from_secs(2);

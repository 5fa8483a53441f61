use url::Url;

use crate::core::{QuoteClient, ScrapeError};

/// Outcome of the bounded request loop for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// An attempt came back with a success status.
    Loaded {
        /// The status of the successful response.
        status: u16,
        /// The raw page body.
        body: String,
        /// Which attempt succeeded (1-based).
        attempts: u32,
    },
    /// No attempt succeeded.
    Exhausted {
        /// How many requests were issued.
        attempts: u32,
        /// The page that was requested.
        url: String,
        /// Status of the final attempt, `None` if it failed below HTTP.
        last_status: Option<u16>,
    },
}

impl FetchResult {
    /// The page body, or [`ScrapeError::FetchExhausted`] if nothing loaded.
    ///
    /// # Errors
    /// Returns [`ScrapeError::FetchExhausted`] for the `Exhausted` variant.
    pub fn into_body(self) -> Result<String, ScrapeError> {
        match self {
            Self::Loaded { body, .. } => Ok(body),
            Self::Exhausted {
                attempts,
                url,
                last_status,
            } => Err(ScrapeError::FetchExhausted {
                attempts,
                url,
                last_status,
            }),
        }
    }
}

/// Requests `url` up to `max_attempts` times, pausing between attempts.
///
/// Stops at the first `200`. Any other status consumes an attempt. Transport
/// errors abort immediately unless the client's retry policy opts them in.
pub(crate) fn fetch_page(
    client: &QuoteClient,
    url: &Url,
    max_attempts: u32,
) -> Result<FetchResult, ScrapeError> {
    if max_attempts == 0 {
        return Err(ScrapeError::InvalidAttempts);
    }

    let retry = client.retry_config();
    let mut last_status = None;

    for attempt in 1..=max_attempts {
        match client.transport().get(url) {
            Ok(resp) if resp.is_success() => {
                #[cfg(feature = "tracing")]
                tracing::debug!(attempt, status = resp.status, bytes = resp.body.len(), "quote page loaded");

                return Ok(FetchResult::Loaded {
                    status: resp.status,
                    body: resp.body,
                    attempts: attempt,
                });
            }
            Ok(resp) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(attempt, max_attempts, status = resp.status, %url, "quote page request failed");

                last_status = Some(resp.status);
            }
            Err(ScrapeError::Http(e)) if retry.retries_transport_error(&e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(attempt, max_attempts, error = %e, %url, "quote page request errored");

                last_status = None;
            }
            Err(e) => return Err(e),
        }

        if attempt < max_attempts {
            client.pause().pause(retry.backoff.delay_after(attempt));
        }
    }

    Ok(FetchResult::Exhausted {
        attempts: max_attempts,
        url: url.to_string(),
        last_status,
    })
}

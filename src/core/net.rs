//! Blocking page transport and the pause primitive used between attempts.
//!
//! Both are traits so the retry loop can be driven without a network or a
//! real clock; [`HttpTransport`] and [`ThreadPause`] are what a default
//! [`QuoteClient`](crate::QuoteClient) uses.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::core::ScrapeError;

/// Status and body of one completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body decoded as text.
    pub body: String,
}

impl PageResponse {
    /// Only a plain `200 OK` counts as a loaded page.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Issues one blocking GET and hands back whatever status the server answered with.
///
/// Non-success statuses are **not** errors at this level; the retry loop decides what
/// to do with them. `Err` is reserved for failures that produced no response at all.
pub trait Transport: Send + Sync + fmt::Debug {
    /// Performs the request.
    ///
    /// # Errors
    /// Returns [`ScrapeError::Http`] if the request could not be completed.
    fn get(&self, url: &Url) -> Result<PageResponse, ScrapeError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &Url) -> Result<PageResponse, ScrapeError> {
        (**self).get(url)
    }
}

/// The reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Wraps an already configured blocking client.
    #[must_use]
    pub const fn new(http: Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<PageResponse, ScrapeError> {
        let resp = self.http.get(url.clone()).send()?;
        let status = resp.status().as_u16();
        let body = get_text(resp)?;
        Ok(PageResponse { status, body })
    }
}

/// Read the response body as text.
pub(crate) fn get_text(resp: reqwest::blocking::Response) -> Result<String, reqwest::Error> {
    let text = resp.text()?;

    #[cfg(feature = "tracing")]
    tracing::trace!(bytes = text.len(), "read response body");

    Ok(text)
}

/// Blocks the calling thread between two attempts.
pub trait Pause: Send + Sync + fmt::Debug {
    /// Sleeps for `dur`.
    fn pause(&self, dur: Duration);
}

impl<T: Pause + ?Sized> Pause for Arc<T> {
    fn pause(&self, dur: Duration) {
        (**self).pause(dur);
    }
}

/// Sleeps on the current thread with [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&self, dur: Duration) {
        std::thread::sleep(dur);
    }
}

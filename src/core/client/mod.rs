//! Public client surface + builder.
//! Internals are split into `retry` (attempt policy) and `constants` (UA + defaults).

pub(crate) mod constants;
mod retry;

pub use constants::DEFAULT_SYMBOL;
pub use retry::{Backoff, RetryConfig};

use crate::core::ScrapeError;
use crate::core::net::{HttpTransport, Pause, ThreadPause, Transport};
use constants::{DEFAULT_BASE_QUOTE, USER_AGENT};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Holds everything a quote fetch needs: where the page lives, how to request it,
/// how often to retry and how to wait in between.
///
/// Cloning is cheap; the transport and pause are shared.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    transport: Arc<dyn Transport>,
    pause: Arc<dyn Pause>,
    base_quote: Url,
    retry: RetryConfig,
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl QuoteClient {
    /// Create a new builder.
    pub fn builder() -> QuoteClientBuilder {
        QuoteClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
    pub(crate) fn pause(&self) -> &dyn Pause {
        self.pause.as_ref()
    }
    pub(crate) fn base_quote(&self) -> &Url {
        &self.base_quote
    }

    /// The retry policy applied to every fetch made through this client.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct QuoteClientBuilder {
    user_agent: Option<String>,
    base_quote: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
    transport: Option<Arc<dyn Transport>>,
    pause: Option<Arc<dyn Pause>>,
}

impl QuoteClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quotes HTML base (e.g., `https://finance.yahoo.com/quote/`).
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: reqwest's own.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the default retry policy (3 attempts, 2s fixed pause).
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Use a custom transport instead of the reqwest one.
    /// User-Agent and timeouts are ignored when this is set.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Use a custom pause instead of sleeping the current thread.
    pub fn pause(mut self, pause: impl Pause + 'static) -> Self {
        self.pause = Some(Arc::new(pause));
        self
    }

    /// Builds the client, creating the reqwest transport unless one was supplied.
    ///
    /// # Errors
    /// Returns [`ScrapeError::Url`] if the default quote base fails to parse and
    /// [`ScrapeError::Http`] if the reqwest client cannot be constructed.
    pub fn build(self) -> Result<QuoteClient, ScrapeError> {
        let base_quote = match self.base_quote {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE)?,
        };

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => {
                let mut httpb = reqwest::blocking::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
                    .cookie_store(true);

                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }

                Arc::new(HttpTransport::new(httpb.build()?))
            }
        };

        Ok(QuoteClient {
            transport,
            pause: self.pause.unwrap_or_else(|| Arc::new(ThreadPause)),
            base_quote,
            retry: self.retry.unwrap_or_default(),
        })
    }
}

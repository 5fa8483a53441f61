//! Core components of the `quote-scrape` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`QuoteClient`] and its builder.
//! - The primary [`ScrapeError`] type.
//! - The blocking transport and pause seams the retry loop runs on.

/// The main client (`QuoteClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`ScrapeError`) for the crate.
pub mod error;
/// Page transport and pause traits with their default implementations.
pub mod net;

// convenient re-exports so most code can just `use crate::core::QuoteClient`
pub use client::{Backoff, QuoteClient, QuoteClientBuilder, RetryConfig};
pub use error::ScrapeError;
pub use net::{HttpTransport, PageResponse, Pause, ThreadPause, Transport};

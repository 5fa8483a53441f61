//! Parse the quote page HTML and pull out the snapshot fields.

pub mod selector;

use scraper::Html;

use super::{QuoteField, QuoteSnapshot};
use crate::core::ScrapeError;
use selector::select_text;

/// Extracts a [`QuoteSnapshot`] from a quote page body.
///
/// Fields are looked up in [`QuoteField::ALL`] order; the first one that is
/// absent is reported.
///
/// # Errors
/// Returns [`ScrapeError::Extraction`] naming the first missing field.
pub fn extract_snapshot(html: &str) -> Result<QuoteSnapshot, ScrapeError> {
    let document = Html::parse_document(html);

    let price = required(&document, QuoteField::Price)?;
    let previous_close = required(&document, QuoteField::PreviousClose)?;
    let market_cap = required(&document, QuoteField::MarketCap)?;

    Ok(QuoteSnapshot::new(price, previous_close, market_cap))
}

fn required(document: &Html, field: QuoteField) -> Result<String, ScrapeError> {
    select_text(document, &field.selector())?.ok_or(ScrapeError::Extraction { field })
}

use std::fmt;

use serde::Serialize;

use super::scrape::selector::FieldSelector;

/// The three values read off a quote page, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteField {
    /// The streaming last-trade price.
    Price,
    /// The previous session's closing price.
    PreviousClose,
    /// Market capitalisation as printed on the page.
    MarketCap,
}

impl QuoteField {
    /// All fields, in the order they are extracted and reported.
    pub const ALL: [Self; 3] = [Self::Price, Self::PreviousClose, Self::MarketCap];

    /// The markup node this field is read from.
    #[must_use]
    pub const fn selector(self) -> FieldSelector {
        match self {
            Self::Price => FieldSelector::new("fin-streamer", "data-field", "regularMarketPrice"),
            Self::PreviousClose => FieldSelector::new("td", "data-test", "PREV_CLOSE-value"),
            Self::MarketCap => FieldSelector::new("td", "data-test", "MARKET_CAP-value"),
        }
    }

    /// Human readable label, as printed by the binary.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Price => "Stock Price",
            Self::PreviousClose => "Previous Close",
            Self::MarketCap => "Market Cap",
        }
    }
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Price => "price",
            Self::PreviousClose => "previous close",
            Self::MarketCap => "market cap",
        })
    }
}

/// A point-in-time set of the three values scraped from one quote page.
///
/// Values are kept exactly as the page renders them (currency formatting,
/// suffixes like `T`/`B`, surrounding whitespace); no numeric parsing is done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSnapshot {
    price: String,
    previous_close: String,
    market_cap: String,
}

impl QuoteSnapshot {
    pub(crate) const fn new(price: String, previous_close: String, market_cap: String) -> Self {
        Self {
            price,
            previous_close,
            market_cap,
        }
    }

    /// The streaming price text.
    #[must_use]
    pub fn price(&self) -> &str {
        &self.price
    }

    /// The previous close text.
    #[must_use]
    pub fn previous_close(&self) -> &str {
        &self.previous_close
    }

    /// The market cap text.
    #[must_use]
    pub fn market_cap(&self) -> &str {
        &self.market_cap
    }

    /// Looks a value up by field.
    #[must_use]
    pub fn get(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::Price => &self.price,
            QuoteField::PreviousClose => &self.previous_close,
            QuoteField::MarketCap => &self.market_cap,
        }
    }
}

impl fmt::Display for QuoteSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in QuoteField::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field.label(), self.get(field))?;
        }
        Ok(())
    }
}

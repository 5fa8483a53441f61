use quote_scrape::{QuoteClient, QuoteFetcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    quote_scrape::init_tracing();

    let client = QuoteClient::builder().build()?;
    let snapshot = QuoteFetcher::apple(&client).fetch_default()?;

    println!("Apple Inc. (AAPL) Stock Details:");
    println!("{snapshot}");

    Ok(())
}

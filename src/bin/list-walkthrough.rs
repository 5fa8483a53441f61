use quote_scrape::sequence::Walkthrough;

fn main() {
    #[cfg(feature = "tracing-subscriber")]
    quote_scrape::init_tracing();

    let walkthrough = Walkthrough::run();

    #[cfg(feature = "tracing")]
    tracing::debug!(popped = ?walkthrough.popped, len = walkthrough.items.len(), "walkthrough finished");

    for line in walkthrough.lines() {
        println!("{line}");
    }
}

//! Debug dump helpers for troubleshooting selector drift on the live page.

use std::io::Write;

pub(crate) fn enabled() -> bool {
    std::env::var("QUOTE_DEBUG").ok().as_deref() == Some("1")
}

/// Writes the fetched page to the temp dir so the markup can be inspected
/// when a selector stops matching.
pub(crate) fn debug_dump_html(symbol: &str, html: &str) -> std::io::Result<()> {
    let path = std::env::temp_dir().join(format!("quote_scrape-{symbol}.html"));
    let mut f = std::fs::File::create(&path)?;
    f.write_all(html.as_bytes())?;
    eprintln!("QUOTE_DEBUG: wrote {} bytes of HTML to {}", html.len(), path.display());
    Ok(())
}

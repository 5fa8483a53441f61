//! Attribute selectors and the lookup that turns one into text.

use scraper::{Html, Selector};

use crate::core::ScrapeError;

/// Identifies a node by tag name and one exact attribute value,
/// e.g. `td[data-test="PREV_CLOSE-value"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSelector {
    tag: &'static str,
    attribute: &'static str,
    value: &'static str,
}

impl FieldSelector {
    /// A selector matching `<tag attribute="value">`.
    pub const fn new(tag: &'static str, attribute: &'static str, value: &'static str) -> Self {
        Self {
            tag,
            attribute,
            value,
        }
    }

    /// The element name.
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// The attribute that must be present.
    pub const fn attribute(&self) -> &'static str {
        self.attribute
    }

    /// The exact value the attribute must have.
    pub const fn value(&self) -> &'static str {
        self.value
    }

    /// The CSS form of this selector.
    pub fn css(&self) -> String {
        format!(r#"{}[{}="{}"]"#, self.tag, self.attribute, self.value)
    }

    /// Compiles the CSS form.
    ///
    /// # Errors
    /// Returns [`ScrapeError::Selector`] if the tag or attribute is not valid CSS.
    pub fn compile(&self) -> Result<Selector, ScrapeError> {
        let css = self.css();
        Selector::parse(&css).map_err(|e| ScrapeError::Selector(format!("{css}: {e:?}")))
    }
}

/// Text content of the first node matching `selector`, or `None` when nothing matches.
///
/// Text is the concatenation of every descendant text node, untrimmed.
///
/// # Errors
/// Returns [`ScrapeError::Selector`] if the selector does not compile.
pub fn select_text(document: &Html, selector: &FieldSelector) -> Result<Option<String>, ScrapeError> {
    let compiled = selector.compile()?;
    Ok(document
        .select(&compiled)
        .next()
        .map(|el| el.text().collect::<String>()))
}

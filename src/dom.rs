//! DOM operations adapter.
//!
//! Thin helpers over the `dom_query` crate covering the handful of
//! operations the Runeforge parsers perform: parsing, first-match text
//! lookup, and attribute reads. Text is passed around as `StrTendril`
//! (reference-counted, O(1) clone); call `.to_string()` only for owned
//! storage.

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

/// Parse an HTML string into a traversable document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get all text content of a selection's first node and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get an attribute value from a selection's first node.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Trimmed text of the first element matching `css`, if any such element
/// exists and its text is non-empty.
#[must_use]
pub fn select_text(doc: &Document, css: &str) -> Option<String> {
    let sel = doc.select(css);
    let node = sel.nodes().first()?;
    let text = Selection::from(*node).text().trim().to_string();
    if text.is_empty() {
        return None;
    }
    Some(text)
}

/// Trimmed texts of every element matching `css`, in document order.
#[must_use]
pub fn select_texts(doc: &Document, css: &str) -> Vec<String> {
    doc.select(css)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node).text().trim().to_string())
        .collect()
}

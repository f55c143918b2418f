//! Minimal tree-query layer over the HTML5 parser.
//!
//! Callers only need three things from a document: every element matching a selector,
//! the first descendant of an element matching a selector, and an element's text.

use scraper::{ElementRef, Html, Selector};

use super::error::ParseError;

/// A parsed markup document
pub struct MarkupDocument {
    html: Html,
}

impl MarkupDocument {
    /// Parse raw text as an HTML document.
    ///
    /// The HTML5 algorithm accepts any string, so input is rejected up front when it
    /// clearly is not markup: blank, containing NUL bytes, or without a single `<`.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if raw.contains('\0') {
            return Err(ParseError::BinaryInput);
        }
        if !raw.contains('<') {
            return Err(ParseError::NotMarkup);
        }

        Ok(Self { html: Html::parse_document(raw) })
    }

    /// All elements matching `selector`, in document order
    pub fn find_all(&self, selector: &Selector) -> Vec<ElementRef<'_>> {
        self.html.select(selector).collect()
    }
}

/// First descendant of `element` matching `selector`
pub fn find_first<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element.select(selector).next()
}

/// Concatenated text of all descendant text nodes
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text of the first descendant matching `selector`, or an empty string
pub fn first_text(element: ElementRef<'_>, selector: &Selector) -> String {
    find_first(element, selector).map(text_content).unwrap_or_default()
}

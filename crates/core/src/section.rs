//! Section data model shared with the doc-generation driver.

/// A unit of documentation text (for example one function's docstring)
/// being transformed.
///
/// Sections are created and owned by the driver that splits source
/// documentation apart; preprocessors receive a mutable reference and
/// rewrite [`Section::content`] in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Raw section text as newline-separated lines.
    pub content: String,
}

impl Section {
    /// Create a section from raw text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

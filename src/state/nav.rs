//! Navigation geometry: scroll targets and active-section selection.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A page section as measured in the document.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    /// The section's `id` attribute, if it has one.
    pub id: Option<String>,
    /// Offset of the section's top edge from the document top, in CSS px.
    pub top: f64,
}

impl SectionBox {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: Some(id.into()), top }
    }
}

/// Element id referenced by an in-page anchor (`#about` -> `about`).
///
/// A bare `#` or an href that is not a fragment resolves to nothing.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Viewport offset that puts a section just below the fixed header.
#[must_use]
pub fn scroll_target(section_top: f64, header_height: f64, gap: f64) -> f64 {
    section_top - header_height - gap
}

/// Id of the section the visitor is currently reading.
///
/// Picks the last section, in document order, whose top minus the header
/// height and `lookahead` is at or above `scroll_offset`. When that section
/// has no id, or no section qualifies, nothing is active.
#[must_use]
pub fn active_section(sections: &[SectionBox], scroll_offset: f64, header_height: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_offset >= section.top - header_height - lookahead)
        .and_then(|section| section.id.as_deref())
}

/// Whether a nav link's href points at the section `id`.
#[must_use]
pub fn link_matches(href: &str, id: &str) -> bool {
    fragment_id(href) == Some(id)
}

//! Flat section spans between consecutive headings.
//!
//! Each heading owns the text from the line after it up to the next heading of
//! any level, or the end of the document. Heading depth plays no part: a `##`
//! section's words are not rolled up into the `#` section above it. Text before
//! the first heading belongs to no section.

use crate::heading::Heading;
use crate::words::count_words;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Word count for the body of one heading.
pub struct Section {
    /// Position of the owning heading in the heading list.
    pub heading_index: usize,
    /// Byte offset where the section body begins (the line after the heading).
    pub byte_start: usize,
    /// Byte offset where the next heading begins or the text ends.
    pub byte_end: usize,
    /// Words in `byte_start..byte_end`.
    pub word_count: usize,
}

impl Section {
    #[must_use]
    /// Whether the section body has no extent at all.
    pub fn is_empty(&self) -> bool {
        self.byte_start >= self.byte_end
    }
}

/// Count the words under each heading.
///
/// `headings` must come from [`crate::heading::locate_headings`] on the same
/// `text`. Returns one entry per heading, in order.
#[must_use]
pub fn compute_sections(text: &str, headings: &[Heading<'_>]) -> Vec<Section> {
    headings
        .iter()
        .enumerate()
        .map(|(heading_index, heading)| {
            let byte_start = heading.next_line_start;
            let byte_end = headings
                .get(heading_index + 1)
                .map_or(text.len(), |next| next.line_start);

            let mut section = Section {
                heading_index,
                byte_start,
                byte_end,
                word_count: 0,
            };
            if !section.is_empty() {
                section.word_count = text.get(byte_start..byte_end).map_or(0, count_words);
            }
            section
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;

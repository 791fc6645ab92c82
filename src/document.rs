//! Whole-document analysis in original coordinates.
//!
//! The core functions only ever see the text after the preamble. This is the
//! boundary that adds the preamble offset back, so every [`Annotation`] points at
//! the heading's real line in the file, and that computes the document total from
//! the same stripped text.

use crate::heading::locate_headings;
use crate::position::LineIndex;
use crate::preamble::strip_preamble;
use crate::section::compute_sections;
use crate::words::count_words;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Word count anchored on a heading line of the original document.
pub struct Annotation {
    /// Heading text without markup symbols.
    pub title: String,
    /// Number of `#` characters (1 for top-level).
    pub level: usize,
    /// Zero-based line of the heading.
    pub line: usize,
    /// Starting column of the heading (always 0, headings start their line).
    pub column_start: usize,
    /// Column just past the heading's last character.
    pub column_end: usize,
    /// Byte offset of the heading line start.
    pub byte_start: usize,
    /// Byte offset of the heading line end, excluding the line break.
    pub byte_end: usize,
    /// Words in the section under this heading.
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Section and document word counts for one snapshot of a document.
pub struct Analysis {
    /// Bytes of leading metadata excluded from every count.
    pub preamble_offset: usize,
    /// Words in everything after the preamble, including text before the first
    /// heading.
    pub total_words: usize,
    /// One entry per heading, in document order.
    pub annotations: Vec<Annotation>,
}

/// Strip, segment and count `text`, reporting positions in `text` itself.
#[must_use]
pub fn analyse(text: &str) -> Analysis {
    let stripped = strip_preamble(text);
    let offset = stripped.offset;
    if offset > 0 {
        debug!("Skipping {offset} bytes of preamble");
    }

    let headings = locate_headings(stripped.content);
    debug!("Found {} headings", headings.len());
    let sections = compute_sections(stripped.content, &headings);

    let lines = LineIndex::new(text);
    let annotations = headings
        .iter()
        .zip(&sections)
        .map(|(heading, section)| {
            let byte_start = offset + heading.line_start;
            let byte_end = offset + heading.line_end;
            let start = lines.position(byte_start);
            let end = lines.position(byte_end);
            Annotation {
                title: heading.title().to_string(),
                level: heading.level(),
                line: start.line,
                column_start: start.column,
                column_end: end.column,
                byte_start,
                byte_end,
                word_count: section.word_count,
            }
        })
        .collect();

    Analysis {
        preamble_offset: offset,
        total_words: count_words(stripped.content),
        annotations,
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;

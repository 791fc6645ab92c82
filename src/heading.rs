//! Heading line detection.
//!
//! A heading is any line that starts with a run of `#` followed by at least one
//! whitespace character: `# Title`, `### Deeper`, or a bare `#` line, whose line
//! break is the whitespace. A `#tag` without whitespace is ordinary text. Headings
//! are not checked against code fences or anything else markdown-aware.
//!
//! The whitespace run may cross line breaks, so a match can run on into the
//! lines below a bare `#`. Only the line holding the `#` run is the heading; a
//! heading-looking line swallowed by such a match is not reported on its own.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Hash run, whitespace (line breaks included), rest of the line.
static HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+\s+.*$").expect("heading pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// A heading line, located by byte offsets into the text it was found in.
pub struct Heading<'a> {
    /// Offset of the first `#` (the start of the line).
    pub line_start: usize,
    /// Offset of the end of the line, excluding `\n` or `\r\n`.
    pub line_end: usize,
    /// Offset of the following line, or the end of the text for a final line
    /// without a line break.
    pub next_line_start: usize,
    /// The heading line as written, without its line break.
    pub raw_line: &'a str,
}

impl Heading<'_> {
    #[must_use]
    /// Number of leading `#` characters.
    pub fn level(&self) -> usize {
        self.raw_line.bytes().take_while(|&b| b == b'#').count()
    }

    #[must_use]
    /// Heading text with the `#` run and surrounding whitespace removed.
    pub fn title(&self) -> &str {
        self.raw_line.trim_start_matches('#').trim()
    }
}

/// Find every heading line in `text`, in document order.
///
/// Offsets are relative to `text`. Callers that stripped a preamble first must add
/// its offset back to get positions in the original document.
#[must_use]
pub fn locate_headings(text: &str) -> Vec<Heading<'_>> {
    HEADING_REGEX
        .find_iter(text)
        .map(|m| line_at(text, m.start()))
        .collect()
}

/// The line beginning at `line_start`.
fn line_at(text: &str, line_start: usize) -> Heading<'_> {
    let rest = &text[line_start..];
    let (line_end, next_line_start) = match rest.find('\n') {
        Some(newline) => {
            let end = if rest[..newline].ends_with('\r') {
                newline - 1
            } else {
                newline
            };
            (line_start + end, line_start + newline + 1)
        }
        None => (text.len(), text.len()),
    };
    Heading {
        line_start,
        line_end,
        next_line_start,
        raw_line: &text[line_start..line_end],
    }
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;

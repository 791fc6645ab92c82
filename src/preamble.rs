//! Leading metadata block detection.
//!
//! A document may open with a `---` fenced block (YAML front matter). It is never
//! counted, so the rest of the pipeline works on the text after it and carries the
//! block's length around as an offset.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening fence, the shortest possible body, then a closing fence that must be
/// followed by a line break.
static PREAMBLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A---\s*\n(?s:.*?)\n---\s*\n").expect("preamble pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Document text with any leading metadata block removed.
pub struct Stripped<'a> {
    /// Text following the metadata block, or the whole document if there was none.
    pub content: &'a str,
    /// Byte length of the removed block; `0` when nothing was stripped.
    pub offset: usize,
}

/// Split a leading `---` metadata block off `text`.
///
/// An unterminated block, or one whose closing fence is not followed by a line
/// break, is left in place.
#[must_use]
pub fn strip_preamble(text: &str) -> Stripped<'_> {
    let offset = PREAMBLE_REGEX.find(text).map_or(0, |m| m.end());
    Stripped {
        content: &text[offset..],
        offset,
    }
}

#[cfg(test)]
#[path = "tests/preamble.rs"]
mod tests;

//! Byte offset to line/column mapping.
//!
//! The core reports byte offsets; anything anchored on screen (or printed as
//! `L12`) wants lines. Lines are `\n` terminated, so a `\r` before the newline
//! counts as the tail of its line.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Zero-based line and character column.
pub struct Position {
    /// Line number, starting at 0.
    pub line: usize,
    /// Characters (not bytes) from the start of the line.
    pub column: usize,
}

/// Start offsets of every line in a text.
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    #[must_use]
    /// Index the lines of `text`.
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    #[must_use]
    /// Line containing `offset`. Offsets past the end land on the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        let offset = offset.min(self.text.len());
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    #[must_use]
    /// Line and column of `offset`, clamped to the end of the text.
    ///
    /// An offset inside a multi-byte character counts the characters that start
    /// before it.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self.line_of(offset);
        let line_start = self.line_starts[line];
        let column = self.text[line_start..]
            .char_indices()
            .take_while(|&(i, _)| line_start + i < offset)
            .count();
        Position { line, column }
    }
}

#[cfg(test)]
#[path = "tests/position.rs"]
mod tests;

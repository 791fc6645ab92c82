//! Whitespace word counting.
//!
//! Counting is deliberately naive: markup, punctuation, links and code spans all
//! count as words if they sit between whitespace. Existing counts depend on this.

/// Number of whitespace-delimited tokens in `text`.
///
/// Leading and trailing whitespace is trimmed first, and any run of whitespace
/// (spaces, tabs, line breaks, other Unicode whitespace) separates two tokens.
#[must_use]
pub fn count_words(text: &str) -> usize {
    let clean = text.trim();
    if clean.is_empty() {
        return 0;
    }
    clean.split_whitespace().count()
}

#[cfg(test)]
#[path = "tests/words.rs"]
mod tests;

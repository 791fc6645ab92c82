//! Rendering analyses for people and for tools.
//!
//! The text form puts one line per heading under a per-file total, roughly what an
//! editor would show as an annotation above each heading plus a status indicator.
//! The JSON form is the same data, serialised.

use crate::config::Config;
use crate::document::{Analysis, Annotation};
use serde::Serialize;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Counts for one document, keyed by where it came from.
pub struct FileReport {
    /// Source path, or `<stdin>`.
    pub path: String,
    /// Words in the document after its preamble.
    pub total_words: usize,
    /// Per-heading counts in document order.
    pub sections: Vec<Annotation>,
}

impl FileReport {
    #[must_use]
    /// Attach a source name to an analysis.
    pub fn new(path: impl Into<String>, analysis: Analysis) -> Self {
        Self {
            path: path.into(),
            total_words: analysis.total_words,
            sections: analysis.annotations,
        }
    }
}

#[must_use]
/// Fill `{count}` in a label template.
pub fn format_label(template: &str, count: usize) -> String {
    template.replace("{count}", &count.to_string())
}

#[must_use]
/// Human-readable report: a total line, then one indented line per heading.
///
/// With `total_only` set the heading lines are left out.
pub fn render_text(report: &FileReport, cfg: &Config, total_only: bool) -> String {
    let mut output = format!(
        "{}: {}\n",
        report.path,
        format_label(&cfg.label, report.total_words)
    );
    if total_only {
        return output;
    }

    let width = report
        .sections
        .last()
        .map_or(1, |last| (last.line + 1).to_string().len());
    for section in &report.sections {
        if cfg.hide_empty && section.word_count == 0 {
            continue;
        }
        output.push_str(&format!(
            "  L{:<width$} {} {}  {}\n",
            section.line + 1,
            "#".repeat(section.level),
            section.title,
            format_label(&cfg.label, section.word_count),
        ));
    }
    output
}

/// Pretty-printed JSON array of reports.
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn render_json(reports: &[FileReport]) -> io::Result<String> {
    serde_json::to_string_pretty(reports).map_err(io::Error::other)
}

#[cfg(test)]
#[path = "tests/report.rs"]
mod tests;

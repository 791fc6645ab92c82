//! mdwc: per-section word counts for markdown documents.
//!
//! The core is a handful of pure functions over a document snapshot:
//! [`preamble::strip_preamble`] drops a leading `---` metadata block,
//! [`heading::locate_headings`] finds `#` heading lines,
//! [`section::compute_sections`] turns consecutive headings into flat spans and
//! counts the words in each, and [`words::count_words`] does the tokenising.
//!
//! [`document::analyse`] strings these together and maps the results back onto
//! the original document's lines, which is what the `mdwc` binary reports.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod document;
pub mod heading;
pub mod input;
pub mod position;
pub mod preamble;
pub mod report;
pub mod section;
pub mod words;

//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! We look for an mdwc.toml (or the file passed with `--config`) and load settings
//! from there: which file extensions count as documents, how counts are labelled,
//! and whether empty sections are listed.

use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "mdwc.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from mdwc.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["md".to_string(), "markdown".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = "{count} words".to_string())]
    /// Label template for counts; `{count}` is replaced with the number.
    pub label: String,
    #[facet(default = false)]
    /// Leave sections with no words out of the text report.
    pub hide_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: vec!["md".to_string(), "markdown".to_string()],
            label: "{count} words".to_string(),
            hide_empty: false,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from mdwc.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Some(config) = Self::parse(&contents) {
                return config;
            }
            warn!("Ignoring invalid config file {}", path.display());
        }
        Self::default()
    }

    #[must_use]
    /// Parse TOML configuration, filling absent fields with defaults.
    pub fn parse(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;

//! Document discovery and loading.
//!
//! Paths given on the command line are taken as-is when they are files and walked
//! recursively when they are directories. Only files with a configured extension
//! are picked up from a walk; hidden files and directories are skipped, and
//! symlinked directories are not followed.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Expand `paths` into a sorted, de-duplicated list of document files.
///
/// # Errors
///
/// Returns an error if a path does not exist. Entries that cannot be read during a
/// directory walk are logged and skipped.
pub fn find_documents(paths: &[PathBuf], extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = BTreeSet::new();
    for path in paths {
        if path.is_dir() {
            walk(path, extensions, &mut documents);
        } else if path.is_file() {
            documents.insert(path.clone());
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no such file or directory", path.display()),
            ));
        }
    }
    Ok(documents.into_iter().collect())
}

fn walk(dir: &Path, extensions: &[String], documents: &mut BTreeSet<PathBuf>) {
    let entries = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
    for entry in entries {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() && has_extension(entry.path(), extensions) {
                    documents.insert(entry.into_path());
                }
            }
            Err(e) => warn!("Skipping unreadable entry under {}: {e}", dir.display()),
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    let hidden = entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'));
    if hidden {
        debug!("Skipping hidden path {}", entry.path().display());
    }
    hidden
}

/// Whether `path` ends in one of `extensions` (compared case-insensitively).
#[must_use]
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}

/// Read a document as UTF-8 text.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_document(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;

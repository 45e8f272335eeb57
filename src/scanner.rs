//! Walks a directory tree into a [`ProjectMapping`].
//!
//! Filtering is done by explicit predicates over path components rather than
//! ignore-file semantics, so the same tree always scans the same way no
//! matter what `.gitignore` files it happens to contain. Files that are not
//! valid text are reported and omitted; they are never an error.

use crate::error::Error;
use crate::mapping::{ProjectMapping, RelPath};
use content_inspector::{ContentType, inspect};
use ignore::{DirEntry, WalkBuilder};
use log::{debug, warn};
use memmap2::MmapOptions;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str;

/// Directory and file names excluded outright, matched against whole path
/// components. Excluding a directory prunes its entire subtree.
const EXCLUDED_NAMES: &[&str] = &[
    "__pycache__",
    ".git",
    ".env",
    "venv",
    "node_modules",
    ".pytest_cache",
    ".DS_Store",
];

/// File extensions excluded from scanning.
const EXCLUDED_EXTENSIONS: &[&str] = &["pyc", "log"];

/// Dotfiles kept despite the leading-dot rule.
const DOTFILE_ALLOWLIST: &[&str] = &[".env.example"];

/// Whether a single path component is excluded by name.
///
/// Matching is component-exact, not substring: `mygitignore.txt` is kept
/// even though it contains `git`.
pub fn is_excluded_name(name: &str) -> bool {
    if EXCLUDED_NAMES.contains(&name) {
        return true;
    }
    name.starts_with('.') && !DOTFILE_ALLOWLIST.contains(&name)
}

/// Whether a file name carries an excluded extension.
pub fn has_excluded_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXCLUDED_EXTENSIONS.contains(&ext))
}

/// Result of classifying a file's bytes.
#[derive(Debug, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary,
}

/// Scans a directory tree into a mapping keyed by root-relative path.
///
/// Per-file problems are soft: binary files and unreadable files are logged
/// and skipped, never aborting the scan.
pub fn scan_tree(root: &Path) -> Result<ProjectMapping, Error> {
    let mut mapping = ProjectMapping::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .filter_entry(|entry| entry.depth() == 0 || keep_entry(entry))
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!("error walking tree: {err}");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_path = match RelPath::from_relative(relative) {
            Ok(rel_path) => rel_path,
            Err(err) => {
                warn!("skipping {}: {err}", relative.display());
                continue;
            }
        };

        match read_classified(path) {
            Ok(FileContent::Text(content)) => {
                debug!("added {rel_path}");
                mapping.insert(rel_path, content);
            }
            Ok(FileContent::Binary) => {
                warn!("skipping binary file {rel_path}");
            }
            Err(err) => {
                warn!("skipping unreadable file {rel_path}: {err}");
            }
        }
    }

    Ok(mapping)
}

fn keep_entry(entry: &DirEntry) -> bool {
    // Non-UTF-8 names cannot be represented in a spec document.
    let Some(name) = entry.file_name().to_str() else {
        return false;
    };
    if is_excluded_name(name) {
        return false;
    }
    let is_file = entry.file_type().is_some_and(|t| t.is_file());
    !(is_file && has_excluded_extension(name))
}

/// Reads a file and classifies it as text or binary.
///
/// The first 8 KiB are sniffed with `content_inspector`; whatever passes the
/// sniff must still be valid UTF-8 in full to count as text.
pub fn read_classified(path: &Path) -> io::Result<FileContent> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(FileContent::Text(String::new()));
    }

    let mmap = unsafe { MmapOptions::new().map(&file)? };

    let sample = &mmap[..mmap.len().min(8192)];
    if inspect(sample) == ContentType::BINARY {
        return Ok(FileContent::Binary);
    }

    match str::from_utf8(&mmap) {
        Ok(text) => Ok(FileContent::Text(text.to_string())),
        Err(_) => Ok(FileContent::Binary),
    }
}

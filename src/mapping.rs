//! The in-memory form shared by both conversion directions: a mapping from
//! validated relative paths to text content.

use crate::error::Error;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path};

/// A forward-slash-normalized relative path.
///
/// Validated once at construction: non-empty, not rooted, and free of empty,
/// `.` and `..` components. Ordering on the inner string is the canonical
/// order used when composing a spec document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelPath(String);

impl RelPath {
    /// Parses a path taken from a separator line in a spec document.
    ///
    /// Backslashes are normalized to forward slashes before validation.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let normalized = raw.trim().replace('\\', "/");
        if normalized.is_empty() || normalized.starts_with('/') {
            return Err(Error::InvalidPath(raw.to_string()));
        }
        if normalized
            .split('/')
            .any(|part| part.is_empty() || part == "." || part == "..")
        {
            return Err(Error::InvalidPath(raw.to_string()));
        }
        Ok(RelPath(normalized))
    }

    /// Builds a `RelPath` from a path already made relative to a scan root.
    pub fn from_relative(path: &Path) -> Result<Self, Error> {
        let mut parts = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => {
                    let part = part
                        .to_str()
                        .ok_or_else(|| Error::InvalidPath(path.display().to_string()))?;
                    parts.push(part);
                }
                _ => return Err(Error::InvalidPath(path.display().to_string())),
            }
        }
        if parts.is_empty() {
            return Err(Error::InvalidPath(path.display().to_string()));
        }
        Ok(RelPath(parts.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for RelPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mapping from relative path to text content.
///
/// Built fresh per invocation by the splitter or the scanner, consumed once
/// by the materializer or the composer. Backed by a `BTreeMap` so iteration
/// is always in canonical path order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectMapping {
    files: BTreeMap<RelPath, String>,
}

impl ProjectMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry; an existing entry for the same path is replaced.
    pub fn insert(&mut self, path: RelPath, content: String) -> Option<String> {
        self.files.insert(path, content)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Entries in canonical (lexicographic by path) order.
    pub fn iter(&self) -> impl Iterator<Item = (&RelPath, &str)> {
        self.files.iter().map(|(p, c)| (p, c.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &RelPath> {
        self.files.keys()
    }
}

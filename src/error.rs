use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a conversion.
///
/// Soft per-file conditions during scanning (binary content, unreadable
/// files) are logged and skipped; they never appear here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("spec file not found: {}", .0.display())]
    SpecFileNotFound(PathBuf),

    #[error("project directory not found: {}", .0.display())]
    ProjectDirNotFound(PathBuf),

    /// A separator line named a path that is empty, rooted, or escapes
    /// the output root.
    #[error("invalid path in spec document: {0:?}")]
    InvalidPath(String),

    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Error::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

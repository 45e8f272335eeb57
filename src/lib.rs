//! # spectree
//!
//! Convert between a single flat spec document and a full directory tree.
//!
//! A spec document encodes many files in one text artifact, each introduced
//! by a separator line naming its relative path:
//!
//! ```text
//! # ==================== src/main.rs ====================
//! fn main() {}
//!
//! # ==================== README.md ====================
//! # My project
//! ```
//!
//! Both directions share one intermediate form, the [`ProjectMapping`]:
//! packaging scans a tree into a mapping and composes a document from it;
//! reconstruction splits a document into a mapping and materializes it.
//!
//! ## Packaging a directory
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> Result<(), spectree::Error> {
//!     let count = spectree::convert_to_spec(Path::new("./my-project"), Path::new("project.spec"))?;
//!     println!("packaged {count} files");
//!     Ok(())
//! }
//! ```
//!
//! ## Reconstructing a tree
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> Result<(), spectree::Error> {
//!     spectree::convert_to_tree(Path::new("project.spec"), Path::new("./restored"))?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod composer;
pub mod error;
pub mod mapping;
pub mod materializer;
pub mod scanner;
pub mod splitter;

pub use composer::compose_document;
pub use error::Error;
pub use mapping::{ProjectMapping, RelPath};
pub use materializer::materialize;
pub use scanner::scan_tree;
pub use splitter::split_document;

use log::debug;
use std::fs;
use std::path::Path;

/// Reconstructs a directory tree from a spec document.
///
/// Fails before touching the filesystem if `spec_file` does not exist.
/// Returns the number of files written. A document with no separator lines
/// is not an error; it simply materializes nothing.
pub fn convert_to_tree(spec_file: &Path, output_dir: &Path) -> Result<usize, Error> {
    if !spec_file.is_file() {
        return Err(Error::SpecFileNotFound(spec_file.to_path_buf()));
    }

    debug!("reading {}", spec_file.display());
    let document = fs::read_to_string(spec_file).map_err(|e| Error::io("read", spec_file, e))?;

    let mapping = split_document(&document)?;
    materialize(&mapping, output_dir)?;
    Ok(mapping.len())
}

/// Packages a directory tree as a spec document.
///
/// Fails before touching the filesystem if `project_dir` does not exist.
/// Returns the number of files packaged.
pub fn convert_to_spec(project_dir: &Path, output_file: &Path) -> Result<usize, Error> {
    if !project_dir.is_dir() {
        return Err(Error::ProjectDirNotFound(project_dir.to_path_buf()));
    }

    debug!("scanning {}", project_dir.display());
    let mapping = scan_tree(project_dir)?;

    let document = compose_document(&mapping);
    fs::write(output_file, document).map_err(|e| Error::io("write", output_file, e))?;
    Ok(mapping.len())
}

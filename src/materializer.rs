//! Writes a [`ProjectMapping`] out as a real directory tree.

use crate::error::Error;
use crate::mapping::ProjectMapping;
use log::debug;
use std::fs;
use std::path::Path;

/// Materializes every entry under `output_dir`.
///
/// Parent directories are created as needed and existing files are
/// overwritten. Shell scripts (`.sh`) are made executable after writing. The
/// first failure aborts; there is no rollback, so a partial tree may remain.
pub fn materialize(mapping: &ProjectMapping, output_dir: &Path) -> Result<(), Error> {
    for (path, content) in mapping.iter() {
        let target = output_dir.join(path.as_str());

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io("create directory", parent, e))?;
        }

        fs::write(&target, content).map_err(|e| Error::io("write", &target, e))?;

        if path.as_str().ends_with(".sh") {
            make_executable(&target)?;
        }

        debug!("created {path}");
    }
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), Error> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| Error::io("set permissions on", path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), Error> {
    Ok(())
}

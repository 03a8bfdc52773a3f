//! Directory enumeration: the immediate regular files of the log directory.

use crate::Result;
use crate::error::ScanError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// List the regular files directly inside `dir`, in the order the filesystem
/// returns them. Subdirectories and symlinks are skipped; nothing recurses.
pub fn list_log_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_err = |source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        match entry.file_type() {
            Ok(ft) if ft.is_file() => files.push(entry.path()),
            Ok(_) => {}
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "cannot stat entry, skipping");
            }
        }
    }

    if files.is_empty() {
        return Err(ScanError::NoLogFiles {
            path: dir.to_path_buf(),
        });
    }
    Ok(files)
}

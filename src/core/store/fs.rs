//! Filesystem helpers for store files.
//!
//! Writes go through a temporary file in the target directory followed by a
//! rename, so a failed or interrupted save never truncates the previous file.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};

/// Permission bits store files are written with (Unix only).
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Read a store file.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns `StoreError::Read` for any other IO failure.
pub fn read(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => {
            #[cfg(unix)]
            warn_on_loose_permissions(path);
            Ok(Some(bytes))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}

/// Atomically replace `path` with `contents`.
///
/// # Errors
///
/// Returns `StoreError::Write` if the directory is missing or not writable,
/// or the rename fails. The previous file is left in place on error.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let write_err = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp.path(), fs::Permissions::from_mode(FILE_MODE))
            .map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    debug!(path = %path.display(), bytes = contents.len(), "store file written");

    Ok(())
}

#[cfg(unix)]
fn warn_on_loose_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = fs::metadata(path) {
        let mode = metadata.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            warn!(
                path = %path.display(),
                mode = %format!("{:o}", mode),
                "store file is readable by other users"
            );
        }
    }
}

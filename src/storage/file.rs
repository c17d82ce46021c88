//! Roster file replacement
//!
//! Saves go to a temporary file next to the target, which is renamed over
//! the target only once fully written. A failed save leaves the previous
//! file untouched.

use std::fs::{self, File};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, RosterError};

/// Replace `path` with whatever `write` produces
///
/// `write` receives the temporary file. On error the temporary file is
/// removed and `path` keeps its old contents. When `sync` is set the data
/// is fsynced before the rename.
pub fn replace_file<T, F>(path: &Path, sync: bool, write: F) -> Result<T>
where
    F: FnOnce(&mut File) -> Result<T>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    let value = write(temp.as_file_mut())?;

    if sync {
        temp.as_file().sync_all()?;
    }

    temp.persist(path).map_err(|e| RosterError::Io(e.error))?;
    Ok(value)
}

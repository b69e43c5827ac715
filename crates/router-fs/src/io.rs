//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// The content goes to a sibling temp file first and is renamed over the
/// target only after it has been flushed, so the target is either the old
/// file or the complete new one. The parent directory must already exist.
/// On failure the temp file is removed.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();
    let temp_path = temp_path_for(&native_path);

    tracing::debug!(path = %path, temp = %temp_path.display(), "Writing atomically");

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    if let Err(e) = fill_temp(&mut temp_file, &temp_path, &native_path, content) {
        drop(temp_file);
        discard(&temp_path);
        return Err(e);
    }
    drop(temp_file);

    if let Err(e) = fs::rename(&temp_path, &native_path) {
        discard(&temp_path);
        return Err(Error::io(&native_path, e));
    }

    Ok(())
}

fn fill_temp(file: &mut File, temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    file.write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })
}

/// Temp file in the same directory as the target so the rename stays on one filesystem.
fn temp_path_for(target: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        target
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    target.with_file_name(temp_name)
}

fn discard(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path) {
        tracing::warn!(temp = %temp_path.display(), error = %e, "Failed to remove temp file");
    }
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read raw bytes from a file.
pub fn read_bytes(path: &NormalizedPath) -> Result<Vec<u8>> {
    let native_path = path.to_native();
    fs::read(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

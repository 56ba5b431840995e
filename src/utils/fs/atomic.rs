//! Atomic file write operations using a temp-and-rename strategy.
//!
//! The resolved document is written to a temporary file in the destination
//! directory and then renamed over the target, so readers never observe a
//! partially written file.

use crate::core::file_error::{FileOperation, FileOperationError, FileResultExt};
use std::io::Write;
use std::path::Path;

const CALLER: &str = "utils::fs::atomic";

/// Safely writes a string to a file using atomic operations.
///
/// Convenience wrapper around [`atomic_write`].
///
/// # Examples
///
/// ```rust,no_run
/// use yamlref_cli::utils::fs::safe_write;
/// use std::path::Path;
///
/// # fn example() -> Result<(), yamlref_cli::core::FileOperationError> {
/// safe_write(Path::new("build/openapi.yaml"), "openapi: 3.0.0")?;
/// # Ok(())
/// # }
/// ```
pub fn safe_write(path: &Path, content: &str) -> Result<(), FileOperationError> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file.
///
/// 1. Creates the parent directory if needed
/// 2. Writes `content` to a temporary file next to `path` and syncs it
/// 3. Renames the temporary file over `path`, replacing any existing file
///
/// # Errors
///
/// Every step reports a [`FileOperation::Write`] error naming `path`.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), FileOperationError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent).with_file_context(
        FileOperation::Write,
        parent,
        "creating output directory",
        CALLER,
    )?;

    let mut temp = tempfile::NamedTempFile::new_in(parent).with_file_context(
        FileOperation::Write,
        path,
        "creating temporary output file",
        CALLER,
    )?;

    temp.write_all(content).with_file_context(
        FileOperation::Write,
        path,
        "writing resolved document",
        CALLER,
    )?;
    temp.as_file().sync_all().with_file_context(
        FileOperation::Write,
        path,
        "syncing resolved document to disk",
        CALLER,
    )?;

    temp.persist(path).map_err(|e| e.error).with_file_context(
        FileOperation::Write,
        path,
        "replacing output file",
        CALLER,
    )?;

    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

//! Path utilities for normalization and absolutization.
//!
//! Inclusion chains compare paths by value, so every document path goes
//! through [`normalize_path`] before it is recorded.

use crate::core::file_error::{FileOperation, FileOperationError, FileResultExt};
use std::path::{Component, Path, PathBuf};

/// Normalizes a path by resolving `.` and `..` components.
///
/// This function performs logical path resolution without accessing the
/// filesystem. It does not resolve symbolic links or verify that the path
/// exists.
///
/// - `.` components are dropped
/// - `..` removes the previous normal component
/// - `..` directly under the root is dropped (`/..` is `/`)
/// - leading `..` of a relative path are kept
///
/// # Examples
///
/// ```rust
/// use yamlref_cli::utils::fs::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// let path = Path::new("/api/./paths/../definitions/case.yaml");
/// assert_eq!(normalize_path(path), PathBuf::from("/api/definitions/case.yaml"));
///
/// let relative = Path::new("../shared/./errors.yaml");
/// assert_eq!(normalize_path(relative), PathBuf::from("../shared/errors.yaml"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Turns `path` into an absolute, normalized path.
///
/// Relative paths are resolved against the current working directory.
///
/// # Errors
///
/// Fails with a [`FileOperation::Resolve`] error when the current directory
/// cannot be determined or `path` is empty.
pub fn absolute_path(path: &Path) -> Result<PathBuf, FileOperationError> {
    let absolute = std::path::absolute(path).with_file_context(
        FileOperation::Resolve,
        path,
        "making the document path absolute",
        "utils::fs::paths",
    )?;
    Ok(normalize_path(&absolute))
}

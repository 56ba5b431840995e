//! Reading referenced documents from disk.

use crate::core::{FileOperation, FileResultExt, YamlRefError};
use crate::utils::fs::normalize_path;
use std::path::{Component, Path, PathBuf};

const CALLER: &str = "resolver::loader";

/// Where a document named `file_name` lives when referenced from `directory`.
///
/// Surrounding quote characters are stripped from the name. The name always
/// nests under `directory`: a leading root (`/sub/child.yaml`) is dropped
/// rather than replacing the directory. The result is lexically normalized so
/// that the same file reached through different relative routes compares
/// equal.
#[must_use]
pub fn document_path(directory: &Path, file_name: &str) -> PathBuf {
    let name = file_name.trim_matches(|c| c == '"' || c == '\'');
    let relative: PathBuf = Path::new(name)
        .components()
        .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
        .collect();
    normalize_path(&directory.join(relative))
}

/// Read a whole document as UTF-8 text, dropping exactly one trailing newline.
///
/// # Errors
///
/// - [`YamlRefError::FileTooLarge`] if `max_file_size` is set and exceeded
/// - [`YamlRefError::FileError`] if the file cannot be inspected or read,
///   including invalid UTF-8 content
pub fn read_document(path: &Path, max_file_size: Option<u64>) -> Result<String, YamlRefError> {
    if let Some(limit) = max_file_size {
        let size = std::fs::metadata(path)
            .with_file_context(FileOperation::Metadata, path, "checking document size", CALLER)?
            .len();
        if size > limit {
            return Err(YamlRefError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }

    let mut content = std::fs::read_to_string(path).with_file_context(
        FileOperation::Read,
        path,
        "loading YAML document",
        CALLER,
    )?;

    if content.ends_with('\n') {
        content.pop();
    }

    tracing::trace!("Loaded {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

//! `$ref` resolution for multi-file YAML documents.
//!
//! This module turns a root YAML document whose lines contain `$ref: <file>`
//! entries into a single self-contained text, by replacing every reference
//! line with the (recursively resolved) content of the referenced file.
//!
//! # Architecture Overview
//!
//! Resolution is purely line-oriented. The YAML is never parsed:
//!
//! 1. **Loading** ([`loader`]): a document is read from disk relative to the
//!    directory of the document that referenced it, and one trailing newline
//!    is dropped.
//! 2. **Line classification** ([`line`]): each line is split on the
//!    indentation unit; the first token that starts with a `$ref` key decides
//!    the depth of the reference and whether it is a list item.
//! 3. **Inlining**: the referenced file is resolved recursively and each line
//!    of the result is re-indented to the depth of the reference line.
//! 4. **Cycle detection** ([`heritage`]): every recursion level carries the
//!    chain of documents above it. A document that reappears in its own chain
//!    fails the whole resolution with [`YamlRefError::CircularReference`].
//!
//! Anchor references (`$ref: '#/definitions/Case'`) point inside the final
//! document and are left untouched.
//!
//! # Example
//!
//! Given `api/index.yaml`:
//!
//! ```yaml
//! paths:
//!   /cases:
//!     $ref: ./paths/cases.yaml
//! ```
//!
//! and `api/paths/cases.yaml`:
//!
//! ```yaml
//! get:
//!   summary: List cases
//! ```
//!
//! the resolved text is:
//!
//! ```yaml
//! paths:
//!   /cases:
//!     get:
//!       summary: List cases
//! ```
//!
//! ```rust,no_run
//! use yamlref_cli::resolver::YamlResolver;
//!
//! # fn example() -> Result<(), yamlref_cli::core::YamlRefError> {
//! let mut resolver = YamlResolver::new();
//! resolver.load_file("api/index.yaml")?;
//! resolver.save_file("build/openapi.yaml")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Failure Semantics
//!
//! Any failure anywhere in the reference tree aborts the resolution; no
//! partial output is produced and a previously resolved document held by the
//! [`YamlResolver`] is kept.

pub mod heritage;
pub mod line;
pub mod loader;


use crate::core::YamlRefError;
use crate::utils::fs::{absolute_path, safe_write};
use heritage::Heritage;
use line::LineKind;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Largest supported indentation width.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Knobs for a resolution run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Spaces per indentation level, used both to measure the depth of a
    /// reference and to indent the inlined content
    pub indent_width: usize,
    /// Reject documents larger than this many bytes
    pub max_file_size: Option<u64>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            max_file_size: None,
        }
    }
}

impl ResolveOptions {
    /// The indentation unit as a string of spaces.
    ///
    /// `indent_width` is clamped to `1..=MAX_INDENT_WIDTH`.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width.clamp(1, MAX_INDENT_WIDTH))
    }
}

/// A document that took part in the last resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludedFile {
    /// Absolute, normalized path of the document
    pub path: PathBuf,
    /// Nesting level; the root document is at depth 0
    pub depth: usize,
}

/// Holds the fully resolved text of the most recently loaded root document.
#[derive(Debug, Clone, Default)]
pub struct YamlResolver {
    options: ResolveOptions,
    data: String,
    included: Vec<IncludedFile>,
}

impl YamlResolver {
    /// A resolver with default options and no document loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver using `options`.
    #[must_use]
    pub fn with_options(options: ResolveOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The options this resolver runs with.
    #[must_use]
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve the document at `path` and all its references.
    ///
    /// Relative paths are taken from the current working directory. On
    /// success the resolved text replaces whatever was loaded before; on
    /// failure the previous text is kept.
    ///
    /// # Errors
    ///
    /// - [`YamlRefError::InvalidPath`] if `path` does not name a file
    /// - [`YamlRefError::FileError`] if any document cannot be read
    /// - [`YamlRefError::FileTooLarge`] if a document exceeds the size limit
    /// - [`YamlRefError::MalformedReference`] for a `$ref` without target
    /// - [`YamlRefError::CircularReference`] if a document includes itself
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), YamlRefError> {
        let path = path.as_ref();
        let (directory, file_name) = split_root(path)?;

        let mut walker = Walker::new(&self.options);
        let data = walker.resolve_file(&directory, &file_name, &Heritage::new(), None)?;

        tracing::debug!(
            "Resolved {} ({} documents, {} bytes)",
            path.display(),
            walker.included.len(),
            data.len()
        );

        self.data = data;
        self.included = walker.included;
        Ok(())
    }

    /// The resolved text. Empty until a load succeeds.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// The resolved text as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    /// An owned copy of the resolved bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.as_bytes().to_vec()
    }

    /// Consume the resolver, keeping only the resolved text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.data
    }

    /// Every document read during the last successful load, in the order it
    /// was reached. A document referenced from several places appears once
    /// per reference.
    #[must_use]
    pub fn included_files(&self) -> &[IncludedFile] {
        &self.included
    }

    /// Write the resolved text to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`YamlRefError::FileError`] if the file cannot be written.
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<(), YamlRefError> {
        safe_write(path.as_ref(), &self.data)?;
        Ok(())
    }
}

impl fmt::Display for YamlResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// Resolve `path` with `options` and return the text.
///
/// # Errors
///
/// See [`YamlResolver::load_file`].
pub fn resolve_file(path: impl AsRef<Path>, options: ResolveOptions) -> Result<String, YamlRefError> {
    let mut resolver = YamlResolver::with_options(options);
    resolver.load_file(path)?;
    Ok(resolver.into_string())
}

/// Split the root path into its absolute directory and file name.
fn split_root(path: &Path) -> Result<(PathBuf, String), YamlRefError> {
    let invalid = |reason: &str| YamlRefError::InvalidPath {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let file_name = path.file_name().ok_or_else(|| invalid("the path does not name a file"))?;
    let file_name = file_name.to_str().ok_or_else(|| invalid("the file name is not valid UTF-8"))?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok((absolute_path(parent)?, file_name.to_string()))
}

/// One resolution run: the options, plus the inclusion trace collected so far.
struct Walker<'a> {
    options: &'a ResolveOptions,
    unit: String,
    included: Vec<IncludedFile>,
}

impl<'a> Walker<'a> {
    fn new(options: &'a ResolveOptions) -> Self {
        Self {
            options,
            unit: options.indent_unit(),
            included: Vec::new(),
        }
    }

    fn resolve_file(
        &mut self,
        directory: &Path,
        file_name: &str,
        heritage: &Heritage,
        referrer: Option<&Path>,
    ) -> Result<String, YamlRefError> {
        let path = loader::document_path(directory, file_name);
        if heritage.contains(&path) {
            return Err(YamlRefError::circular(heritage.paths(), &path));
        }

        let document = loader::read_document(&path, self.options.max_file_size).map_err(|e| {
            match (e, referrer) {
                (YamlRefError::FileError(file_error), Some(referrer)) => {
                    YamlRefError::FileError(file_error.with_related_path(referrer))
                }
                (other, _) => other,
            }
        })?;

        let heritage = heritage.descend(path.clone());
        self.included.push(IncludedFile {
            path: path.clone(),
            depth: heritage.depth() - 1,
        });
        tracing::debug!("Expanding {} at depth {}", path.display(), heritage.depth() - 1);

        let directory = path.parent().map_or_else(|| path.clone(), Path::to_path_buf);

        let mut lines = Vec::new();
        for (index, line) in document.split('\n').enumerate() {
            lines.push(self.process_line(line, index + 1, &path, &directory, &heritage)?);
        }
        Ok(lines.join("\n"))
    }

    fn process_line(
        &mut self,
        line: &str,
        line_number: usize,
        file: &Path,
        directory: &Path,
        heritage: &Heritage,
    ) -> Result<String, YamlRefError> {
        let kind = line::classify(line, &self.unit).map_err(|malformed| {
            YamlRefError::MalformedReference {
                file: file.to_path_buf(),
                line_number,
                line: line.to_string(),
                reason: malformed.reason,
            }
        })?;

        match kind {
            LineKind::Plain => Ok(line.to_string()),
            LineKind::Anchor(anchor) => {
                tracing::trace!("Keeping anchor {anchor} in {}:{line_number}", file.display());
                Ok(line.to_string())
            }
            LineKind::Reference(reference) => {
                tracing::debug!(
                    "Inlining {} from {}:{line_number}",
                    reference.target,
                    file.display()
                );
                let resolved = self.resolve_file(directory, &reference.target, heritage, Some(file))?;
                Ok(line::indent_block(&resolved, &reference, &self.unit))
            }
        }
    }
}

//! Error handling for yamlref
//!
//! This module provides the error type shared by the resolution engine and the
//! user-friendly reporting used by the command-line interface. The error system
//! follows two principles:
//! 1. **Strongly-typed errors** so callers can match on the failure mode
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`YamlRefError`] - every failure the resolver and its collaborators can report
//! - [`ErrorContext`] - wrapper adding details and a suggestion for display
//! - [`user_friendly_error`] - converts any [`anyhow::Error`] into an [`ErrorContext`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use yamlref_cli::core::{YamlRefError, user_friendly_error};
//! use std::path::PathBuf;
//!
//! let error = YamlRefError::CircularReference {
//!     chain: vec![PathBuf::from("/api/a.yaml"), PathBuf::from("/api/b.yaml"), PathBuf::from("/api/a.yaml")],
//! };
//! let context = user_friendly_error(anyhow::Error::from(error));
//! context.display(); // colored error, details and suggestion on stderr
//! ```

use crate::core::file_error::FileOperationError;
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for yamlref operations
///
/// Resolution is all-or-nothing: the first error met during the depth-first
/// walk aborts the whole document, so each variant identifies exactly one
/// offending file or inclusion chain.
#[derive(Error, Debug, Clone)]
pub enum YamlRefError {
    /// A document could not be read, or the output could not be written.
    ///
    /// Covers missing files, permission problems, invalid UTF-8 and other
    /// I/O faults. Never retried.
    #[error(transparent)]
    FileError(#[from] FileOperationError),

    /// A file appears twice in its own inclusion chain.
    ///
    /// `chain` is the ordered list of files from the root document down to
    /// the repeated file, which is also the last element.
    #[error("circular reference detected: {}", format_chain(.chain))]
    CircularReference {
        /// The inclusion chain, ending with the file that closed the cycle
        chain: Vec<PathBuf>,
    },

    /// A `$ref` key without a usable target value.
    #[error("malformed reference in {}:{line_number}: {reason}", .file.display())]
    MalformedReference {
        /// The document containing the reference
        file: PathBuf,
        /// 1-based line number within `file`
        line_number: usize,
        /// The offending line, verbatim
        line: String,
        /// What is wrong with the reference
        reason: String,
    },

    /// A document exceeds the configured size limit.
    #[error("file {} is too large ({size} bytes, limit {limit} bytes)", .path.display())]
    FileTooLarge {
        /// The oversized document
        path: PathBuf,
        /// Its size in bytes
        size: u64,
        /// The configured limit in bytes
        limit: u64,
    },

    /// A path handed to the resolver cannot name a document.
    #[error("invalid document path {}: {reason}", .path.display())]
    InvalidPath {
        /// The rejected path
        path: PathBuf,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration file problems
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Render an inclusion chain as `a -> b -> a`.
pub fn format_chain(chain: &[PathBuf]) -> String {
    chain.iter().map(|path| path.display().to_string()).collect::<Vec<_>>().join(" -> ")
}

impl YamlRefError {
    /// Build a [`YamlRefError::CircularReference`] from the current heritage
    /// and the path that was about to be entered again.
    pub fn circular(heritage: &[PathBuf], repeated: &Path) -> Self {
        let mut chain = heritage.to_vec();
        chain.push(repeated.to_path_buf());
        Self::CircularReference {
            chain,
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context about the error in yellow (optional)
/// 3. **Suggestion**: Actionable steps to resolve the issue in green (optional)
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: YamlRefError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: YamlRefError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`YamlRefError`] anywhere in the error chain (commands wrap it
/// with `anyhow` context), bare [`std::io::Error`]s and TOML parse errors.
/// Anything else is reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(yamlref_error) = error.chain().find_map(|cause| cause.downcast_ref::<YamlRefError>())
    {
        return create_error_context(yamlref_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        if io_error.kind() == std::io::ErrorKind::BrokenPipe {
            return ErrorContext::new(YamlRefError::Other {
                message: "output stream closed before the document was written".to_string(),
            });
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(YamlRefError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of your yamlref configuration file")
        .with_details("Supported keys are 'indent-width' and 'max-file-size'");
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(YamlRefError::Other {
        message,
    })
}

/// Map each [`YamlRefError`] variant to tailored details and a suggestion.
fn create_error_context(error: YamlRefError) -> ErrorContext {
    match &error {
        YamlRefError::FileError(file_error) => {
            let details = file_error.user_message();
            let suggestion = match file_error.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check the spelling of the $ref target and that it is relative to the file containing it"
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Check the file permissions or run with a user that can read the documents"
                }
                _ => "Re-run with --verbose to see which document was being processed",
            };
            ErrorContext::new(error).with_details(details).with_suggestion(suggestion)
        }

        YamlRefError::CircularReference {
            chain,
        } => {
            let details = format!(
                "Inclusion chain: {}. A document may not include itself directly or through other documents",
                format_chain(chain)
            );
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Remove one of the $ref lines that closes the cycle")
        }

        YamlRefError::MalformedReference {
            line,
            ..
        } => {
            let details = format!("Offending line: {}", line.trim_end());
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Write references as `$ref: path/to/file.yaml` (quotes optional)")
        }

        YamlRefError::FileTooLarge {
            ..
        } => ErrorContext::new(error).with_suggestion(
            "Raise 'max-file-size' in the configuration or pass --max-file-size",
        ),

        YamlRefError::InvalidPath {
            ..
        } => ErrorContext::new(error).with_suggestion("Pass the path of a YAML file, not a directory"),

        YamlRefError::ConfigError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Fix the configuration file or point --config at another one"),

        YamlRefError::Other {
            ..
        } => ErrorContext::new(error),
    }
}

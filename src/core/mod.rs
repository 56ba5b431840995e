//! Core types for yamlref
//!
//! This module holds the error types shared by the resolution engine, the
//! configuration loader and the command-line interface.
//!
//! # Modules
//!
//! ## `error` - Error handling
//!
//! - [`YamlRefError`] - every failure mode of a resolution
//! - [`ErrorContext`] - user-friendly wrapper with details and suggestions
//! - [`user_friendly_error`] - convert any error into an [`ErrorContext`]
//!
//! ## `file_error` - File operation context
//!
//! - [`FileOperationError`] - an I/O failure together with the file, the
//!   operation and the reason the file was being accessed
//! - [`FileResultExt`] - attaches that context to `std::io::Result`s
//!
//! # Examples
//!
//! ```rust
//! use yamlref_cli::core::{YamlRefError, user_friendly_error};
//!
//! fn handle(result: anyhow::Result<()>) {
//!     if let Err(e) = result {
//!         user_friendly_error(e).display();
//!     }
//! }
//!
//! handle(Err(YamlRefError::Other { message: "example".to_string() }.into()));
//! ```

pub mod error;
pub mod file_error;

pub use error::{ErrorContext, YamlRefError, format_chain, user_friendly_error};
pub use file_error::{FileOperation, FileOperationContext, FileOperationError, FileResultExt};

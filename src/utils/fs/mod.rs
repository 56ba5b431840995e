//! File system utilities
//!
//! - [`paths`] - lexical normalization and absolutization of document paths
//! - [`atomic`] - write-then-rename output writing

pub mod atomic;
pub mod paths;

pub use atomic::{atomic_write, safe_write};
pub use paths::{absolute_path, normalize_path};

//! Supporting utilities
//!
//! - [`fs`] - path normalization and atomic file writes

pub mod fs;

pub use fs::{absolute_path, atomic_write, normalize_path, safe_write};

//! Integration test suite for yamlref
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **resolve**: library-level resolution of multi-file document trees
//! - **errors**: failure reporting through `user_friendly_error`
//! - **cli**: the `yamlref` binary end to end

#[path = "../common/mod.rs"]
mod common;

mod cli;
mod errors;
mod resolve;

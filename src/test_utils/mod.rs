//! Test utilities for yamlref
//!
//! Helpers for building throw-away document trees and for turning on
//! logging inside tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use yamlref_cli::resolver::YamlResolver;
//! use yamlref_cli::test_utils::{DocumentFixture, DocumentTree};
//!
//! let fixture = DocumentFixture::simple();
//! let (_tree, root) = DocumentTree::with_fixture(&fixture).unwrap();
//!
//! let mut resolver = YamlResolver::new();
//! resolver.load_file(&root).unwrap();
//! assert_eq!(Some(resolver.as_str()), fixture.expected.as_deref());
//! ```

pub mod environment;
pub mod fixtures;

pub use environment::DocumentTree;
pub use fixtures::DocumentFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. `level` wins over `RUST_LOG`; with
/// neither set, tests run without a subscriber.
///
/// ```bash
/// RUST_LOG=yamlref_cli=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_ansi(true)
            .try_init();
    });
}

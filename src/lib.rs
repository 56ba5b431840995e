//! yamlref - inline `$ref` references across multi-file YAML documents
//!
//! Large YAML documents such as API descriptions are often split into many
//! files that point at each other with `$ref: <relative path>` lines. yamlref
//! merges them back into one self-contained document by replacing every such
//! line with the referenced file's content, indented to the position of the
//! reference.
//!
//! The merge is textual. Comments, blank lines and formatting survive
//! untouched, and references to in-document anchors (`$ref: '#/...'`) are left
//! for downstream tools.
//!
//! # Core Modules
//!
//! - [`resolver`] - the resolution engine ([`resolver::YamlResolver`])
//! - [`core`] - error types and user-facing error reporting
//! - [`config`] - the optional `~/.yamlref/config.toml`
//! - [`cli`] - the `yamlref` command-line interface
//! - [`utils`] - path normalization and atomic writes
//!
//! # Example
//!
//! ```rust,no_run
//! use yamlref_cli::resolver::{ResolveOptions, resolve_file};
//!
//! # fn example() -> Result<(), yamlref_cli::core::YamlRefError> {
//! let bundled = resolve_file("api/index.yaml", ResolveOptions::default())?;
//! println!("{bundled}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod resolver;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

//! Configuration management for yamlref.
//!
//! Settings come from an optional TOML file (see [`global`]) and can be
//! overridden per invocation from the command line. The merged result is
//! turned into [`crate::resolver::ResolveOptions`].

pub mod global;

pub use global::{CONFIG_ENV, GlobalConfig};

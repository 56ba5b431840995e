//! Command-line interface for yamlref.
//!
//! ```bash
//! yamlref resolve api/index.yaml                      # print the resolved document
//! yamlref resolve api/index.yaml -o build/api.yaml    # write it atomically
//! yamlref resolve api/index.yaml -o build/api.yaml --check
//! yamlref check api/index.yaml                        # resolve and report
//! yamlref tree api/index.yaml --format json           # show included files
//! ```
//!
//! # Global Options
//!
//! - `-v, --verbose`: debug logging on stderr
//! - `-q, --quiet`: errors only
//! - `-c, --config <PATH>`: configuration file to use instead of the default
//!
//! `RUST_LOG` takes precedence over both logging flags.

pub mod check;
pub mod common;
pub mod resolve;
pub mod tree;


use crate::config::GlobalConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: Option<String>,
    /// Explicit configuration file
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Safe to call more than once; only the first call installs a subscriber.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_level.as_deref().unwrap_or("warn")));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Inline `$ref` references across multi-file YAML documents.
#[derive(Parser, Debug)]
#[command(
    name = "yamlref",
    about = "Inline $ref references across multi-file YAML documents",
    version,
    long_about = "yamlref replaces every `$ref: <file>` line of a YAML document with the \
                  referenced file's content, indented to the reference's position, and \
                  produces a single self-contained document."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show debug output on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file (default: $YAMLREF_CONFIG or ~/.yamlref/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a document and print or save the result
    Resolve(resolve::ResolveCommand),

    /// Resolve a document and report success without printing it
    Check(check::CheckCommand),

    /// List the documents a resolution pulls in
    Tree(tree::TreeCommand),
}

impl Cli {
    /// Run the parsed command.
    ///
    /// # Errors
    ///
    /// Any configuration, resolution or output failure.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            config_path: self.config.clone(),
        }
    }

    /// Run the command with an explicit [`CliConfig`].
    ///
    /// # Errors
    ///
    /// Any configuration, resolution or output failure.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let settings = GlobalConfig::load_with_optional(config.config_path).await?;
        tracing::debug!("Using {settings:?}");

        match self.command {
            Commands::Resolve(cmd) => cmd.execute(settings).await,
            Commands::Check(cmd) => cmd.execute(settings).await,
            Commands::Tree(cmd) => cmd.execute(settings).await,
        }
    }
}

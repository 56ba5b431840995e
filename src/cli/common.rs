//! Arguments and helpers shared by the subcommands.

use crate::config::GlobalConfig;
use crate::core::YamlRefError;
use crate::resolver::YamlResolver;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// The root document plus per-run overrides of the configuration file.
#[derive(Args, Debug, Clone)]
pub struct DocumentArgs {
    /// Root YAML document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Spaces per indentation level
    #[arg(long, value_name = "N")]
    pub indent_width: Option<usize>,

    /// Refuse documents larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,
}

/// Resolve the document named by `args` on the blocking pool.
///
/// # Errors
///
/// Invalid overrides, or any [`YamlRefError`] raised by the resolution.
pub async fn resolve_document(args: &DocumentArgs, settings: GlobalConfig) -> Result<YamlResolver> {
    let options = settings.with_overrides(args.indent_width, args.max_file_size)?.to_options();
    let file = args.file.clone();

    tracing::debug!("Resolving {} with {options:?}", file.display());

    let resolver = tokio::task::spawn_blocking(move || -> Result<YamlResolver, YamlRefError> {
        let mut resolver = YamlResolver::with_options(options);
        resolver.load_file(&file)?;
        Ok(resolver)
    })
    .await
    .context("Resolution task failed")??;

    Ok(resolver)
}

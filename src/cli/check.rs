//! The `check` command: resolve, discard the text, report.

use super::common::{DocumentArgs, resolve_document};
use crate::config::GlobalConfig;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::collections::HashSet;

/// Resolve a document and report success without printing it
#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub document: DocumentArgs,
}

impl CheckCommand {
    /// Run the command.
    ///
    /// # Errors
    ///
    /// Any resolution failure.
    pub async fn execute(self, settings: GlobalConfig) -> Result<()> {
        let resolver = resolve_document(&self.document, settings).await?;

        let included = resolver.included_files();
        let distinct: HashSet<_> = included.iter().map(|file| &file.path).collect();

        println!(
            "{} {} resolves cleanly ({} inclusions of {} files, {} bytes)",
            "✓".green(),
            self.document.file.display(),
            included.len(),
            distinct.len(),
            resolver.as_bytes().len()
        );
        Ok(())
    }
}

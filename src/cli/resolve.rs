//! The `resolve` command.
//!
//! Without `--output` the resolved document goes to stdout, followed by a
//! newline. With `--output` it is written atomically to the given file,
//! exactly as resolved. `--check` compares the freshly resolved text with
//! the existing output file instead of writing it, which suits CI jobs that
//! commit the bundled document.

use super::common::{DocumentArgs, resolve_document};
use crate::config::GlobalConfig;
use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

/// Resolve a document and print or save the result
#[derive(Args, Debug)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Write the resolved document here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Fail if the output file is missing or differs, without writing it
    #[arg(long, requires = "output")]
    pub check: bool,
}

impl ResolveCommand {
    /// Run the command.
    ///
    /// # Errors
    ///
    /// Resolution failures, write failures, and a stale output file under
    /// `--check`.
    pub async fn execute(self, settings: GlobalConfig) -> Result<()> {
        let resolver = resolve_document(&self.document, settings).await?;

        let Some(output) = self.output else {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{resolver}")?;
            stdout.flush()?;
            return Ok(());
        };

        if self.check {
            let current = match tokio::fs::read_to_string(&output).await {
                Ok(content) => Some(content),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to read {} for comparison", output.display())
                    });
                }
            };
            if current.as_deref() != Some(resolver.as_str()) {
                bail!(
                    "{} is out of date with {}; run `yamlref resolve {} -o {}`",
                    output.display(),
                    self.document.file.display(),
                    self.document.file.display(),
                    output.display()
                );
            }
            println!("{} {} is up to date", "✓".green(), output.display());
            return Ok(());
        }

        resolver.save_file(&output)?;
        println!(
            "{} Wrote {} ({} documents)",
            "✓".green(),
            output.display(),
            resolver.included_files().len()
        );
        Ok(())
    }
}

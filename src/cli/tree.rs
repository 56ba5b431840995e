//! The `tree` command: show which documents a resolution pulls in.
//!
//! ```text
//! index.yaml
//!   paths/cases.yaml
//!   definitions/complete_case.yaml
//!     shared/id.yaml
//! ```
//!
//! Paths are shown relative to the root document's directory where
//! possible. The JSON format lists absolute paths with their depth:
//!
//! ```json
//! [
//!   { "path": "/work/api/index.yaml", "depth": 0 },
//!   { "path": "/work/api/paths/cases.yaml", "depth": 1 }
//! ]
//! ```

use super::common::{DocumentArgs, resolve_document};
use crate::config::GlobalConfig;
use crate::resolver::IncludedFile;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::Path;

/// Output format for `tree`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TreeFormat {
    /// Indented list
    #[default]
    Text,
    /// JSON array of `{path, depth}`
    Json,
}

/// List the documents a resolution pulls in
#[derive(Args, Debug)]
pub struct TreeCommand {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = TreeFormat::Text)]
    pub format: TreeFormat,
}

impl TreeCommand {
    /// Run the command.
    ///
    /// # Errors
    ///
    /// Any resolution failure.
    pub async fn execute(self, settings: GlobalConfig) -> Result<()> {
        let resolver = resolve_document(&self.document, settings).await?;
        let included = resolver.included_files();

        match self.format {
            TreeFormat::Json => {
                let json = serde_json::to_string_pretty(included)
                    .context("Failed to serialize the inclusion tree")?;
                println!("{json}");
            }
            TreeFormat::Text => print!("{}", render_text(included)),
        }
        Ok(())
    }
}

/// One line per inclusion, indented two spaces per depth level.
fn render_text(included: &[IncludedFile]) -> String {
    let base = included.first().and_then(|root| root.path.parent());

    let mut out = String::new();
    for file in included {
        let shown = display_path(&file.path, base);
        let line = if file.depth == 0 {
            shown.bold().to_string()
        } else {
            shown
        };
        out.push_str(&"  ".repeat(file.depth));
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn display_path(path: &Path, base: Option<&Path>) -> String {
    base.and_then(|base| path.strip_prefix(base).ok())
        .unwrap_or(path)
        .display()
        .to_string()
}

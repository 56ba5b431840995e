//! User-wide settings for yamlref.
//!
//! The configuration file is optional. When present it is a small TOML
//! document:
//!
//! ```toml
//! # Width of one indentation level, in spaces
//! indent-width = 2
//! # Refuse to load documents larger than this many bytes
//! max-file-size = 1048576
//! ```
//!
//! # Location
//!
//! 1. The path given with `--config`
//! 2. `$YAMLREF_CONFIG`
//! 3. `~/.yamlref/config.toml`
//!
//! A missing file at the default location means defaults. A file named
//! explicitly with `--config` must exist.

use crate::core::YamlRefError;
use crate::resolver::{DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH, ResolveOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "YAMLREF_CONFIG";

/// Settings read from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GlobalConfig {
    /// Spaces per indentation level.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Per-document size limit in bytes. Unlimited when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,
}

const fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            max_file_size: None,
        }
    }
}

impl GlobalConfig {
    /// Load from the default location, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read, parsed or validated.
    pub async fn load() -> Result<Self> {
        Self::load_with_optional(None).await
    }

    /// Load from `path` if given, otherwise from the default location.
    ///
    /// # Errors
    ///
    /// Fails if an explicitly named file does not exist, or if the selected
    /// file cannot be read, parsed or validated.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            if !fs::try_exists(&path).await.unwrap_or(false) {
                return Err(YamlRefError::ConfigError {
                    message: format!("config file {} does not exist", path.display()),
                }
                .into());
            }
            return Self::load_from(&path).await;
        }

        let Some(path) = Self::default_path() else {
            tracing::debug!("No home directory, using default configuration");
            return Ok(Self::default());
        };

        if fs::try_exists(&path).await.unwrap_or(false) {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load and validate the file at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid TOML for this schema,
    /// or holds out-of-range values.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content).map_err(|e| YamlRefError::ConfigError {
            message: format!("failed to parse {}: {}", path.display(), e.message()),
        })?;
        config.validate()?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Where the configuration file is looked for when `--config` is not given.
    ///
    /// `None` only if the home directory cannot be determined and
    /// `YAMLREF_CONFIG` is unset.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        config_path_from(std::env::var_os(CONFIG_ENV), dirs::home_dir())
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`YamlRefError::ConfigError`] for a zero or oversized indent
    /// width, or a zero size limit.
    pub fn validate(&self) -> Result<(), YamlRefError> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(YamlRefError::ConfigError {
                message: format!(
                    "indent-width must be between 1 and {MAX_INDENT_WIDTH}, got {}",
                    self.indent_width
                ),
            });
        }
        if self.max_file_size == Some(0) {
            return Err(YamlRefError::ConfigError {
                message: "max-file-size must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the file settings.
    ///
    /// # Errors
    ///
    /// Returns [`YamlRefError::ConfigError`] if the result is out of range.
    pub fn with_overrides(
        mut self,
        indent_width: Option<usize>,
        max_file_size: Option<u64>,
    ) -> Result<Self, YamlRefError> {
        if let Some(width) = indent_width {
            self.indent_width = width;
        }
        if max_file_size.is_some() {
            self.max_file_size = max_file_size;
        }
        self.validate()?;
        Ok(self)
    }

    /// The resolver options these settings describe.
    #[must_use]
    pub fn to_options(&self) -> ResolveOptions {
        ResolveOptions {
            indent_width: self.indent_width,
            max_file_size: self.max_file_size,
        }
    }
}

fn config_path_from(env_value: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match env_value {
        Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => home.map(|home| home.join(".yamlref").join("config.toml")),
    }
}

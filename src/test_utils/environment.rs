//! Temporary document trees for resolver and CLI tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures::DocumentFixture;

/// A temporary directory holding YAML documents
pub struct DocumentTree {
    pub temp_dir: TempDir,
}

impl DocumentTree {
    /// Create an empty tree
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Create a tree holding `fixture`, returning the tree and the root path
    pub fn with_fixture(fixture: &DocumentFixture) -> Result<(Self, PathBuf)> {
        let tree = Self::new()?;
        let root = fixture.write_to(tree.root())?;
        Ok((tree, root))
    }

    /// The directory all documents live under
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the tree
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a document, creating parent directories
    pub fn add(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    /// Read a file from the tree
    pub fn read(&self, relative: &str) -> Result<String> {
        let path = self.path(relative);
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
    }
}

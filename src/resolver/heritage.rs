//! Inclusion chains used for cycle detection.

use std::path::{Path, PathBuf};

/// The ordered list of documents from the root down to the one currently
/// being expanded.
///
/// Each recursion level works on its own copy, so sibling references never
/// see each other's entries. A document included twice from different
/// branches is therefore fine; only a document that reappears inside its own
/// chain is a cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heritage(Vec<PathBuf>);

impl Heritage {
    /// An empty chain, used for the root document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `path` is already part of the chain.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.0.iter().any(|entry| entry == path)
    }

    /// A copy of this chain extended with `path`.
    #[must_use]
    pub fn descend(&self, path: PathBuf) -> Self {
        let mut chain = self.0.clone();
        chain.push(path);
        Self(chain)
    }

    /// The documents in the chain, root first.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.0
    }

    /// Number of documents in the chain.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace folder resolution for run working directories.

use std::path::{Path, PathBuf};

use crate::document::DocumentId;

/// The set of open workspace roots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceFolders {
    roots: Vec<PathBuf>,
}

impl WorkspaceFolders {
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self { roots: roots.into_iter().collect() }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// The innermost root that contains `document`, if any.
    pub fn resolve(&self, document: &DocumentId) -> Option<&Path> {
        let path = document.as_path();
        self.roots
            .iter()
            .filter(|root| path.starts_with(root))
            .max_by_key(|root| root.components().count())
            .map(PathBuf::as_path)
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;

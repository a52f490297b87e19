// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Documents as seen by the directive scanner.
//!
//! The editor owns the real text buffer; the core only needs ordered line
//! text, a language tag and an identity. [`TextDocument`] is that boundary,
//! and [`SourceDocument`] is the in-memory implementation used by the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::directive::{scan, Scan};

/// Errors from reading document text
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("line {line} out of range (document has {count} lines)")]
    LineOutOfRange { line: usize, count: usize },
}

/// Opaque identity of a document (its filesystem path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(PathBuf);

impl DocumentId {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for DocumentId {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for DocumentId {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

/// Language tag of a document.
///
/// Only Go sources carry `//go:generate` directives; everything else is
/// kept verbatim so the host can round-trip its own identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    Go,
    Other(String),
}

impl Language {
    /// Guess the language from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("go") => Language::Go,
            Some(ext) => Language::Other(ext.to_string()),
            None => Language::Other("plaintext".to_string()),
        }
    }

    /// Whether documents of this language are scanned for directives.
    pub fn bears_directives(&self) -> bool {
        matches!(self, Language::Go)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Language::Go => "go",
            Language::Other(id) => id,
        }
    }
}

impl From<String> for Language {
    fn from(id: String) -> Self {
        if id == "go" {
            Language::Go
        } else {
            Language::Other(id)
        }
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        match language {
            Language::Go => "go".to_string(),
            Language::Other(id) => id,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to a document's lines.
///
/// `line_at` may fail when the underlying buffer changed after `line_count`
/// was taken; callers degrade instead of propagating.
pub trait TextDocument {
    fn id(&self) -> &DocumentId;
    fn language(&self) -> &Language;
    fn line_count(&self) -> usize;
    fn line_at(&self, index: usize) -> Result<&str, DocumentError>;
}

/// An immutable snapshot of a document's text split into lines.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    id: DocumentId,
    language: Language,
    lines: Vec<String>,
}

impl SourceDocument {
    pub fn new(id: impl Into<DocumentId>, language: Language, text: &str) -> Self {
        Self { id: id.into(), language, lines: text.lines().map(str::to_string).collect() }
    }

    /// Read a document from disk, tagging it by file extension.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| DocumentError::Read { path: path.to_path_buf(), source })?;
        Ok(Self::new(path, Language::from_path(path), &text))
    }

    /// Override the language tag (hosts know better than extensions).
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Directives in this document; empty unless the language bears them.
    pub fn directives(&self, enabled: bool) -> Scan<'_, std::slice::Iter<'_, String>> {
        scan(&self.id, &self.lines, enabled && self.language.bears_directives())
    }
}

impl TextDocument for SourceDocument {
    fn id(&self) -> &DocumentId {
        &self.id
    }

    fn language(&self) -> &Language {
        &self.language
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_at(&self, index: usize) -> Result<&str, DocumentError> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(DocumentError::LineOutOfRange { line: index, count: self.lines.len() })
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;

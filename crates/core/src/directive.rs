// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `//go:generate` directive scanning.
//!
//! Scanning is purely textual and line based: the host language is never
//! parsed, so a marker at the start of a line inside a raw string or block
//! comment is still reported as a directive.

use std::iter::{Enumerate, FusedIterator};

use serde::{Deserialize, Serialize};

use crate::document::DocumentId;
use crate::normalize::normalize_command;

/// Marker that starts a directive, matched case-sensitively at the start of
/// the trimmed line.
pub const DIRECTIVE_MARKER: &str = "//go:generate";

/// A generation directive found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// Zero-based line index of the directive comment
    pub line: usize,
    /// Text after the marker, trimmed
    pub raw: String,
    /// `raw` with flag values quoted, ready for the shell
    pub command: String,
    pub document: DocumentId,
}

impl Directive {
    /// 1-based line number for display.
    pub fn line_number(&self) -> usize {
        self.line + 1
    }
}

/// Extract the raw command from a single line, if it is a non-empty directive.
pub fn parse_line(text: &str) -> Option<&str> {
    let raw = text.trim().strip_prefix(DIRECTIVE_MARKER)?.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

/// Build the directive for one line of a document.
pub fn directive_at(document: &DocumentId, line: usize, text: &str) -> Option<Directive> {
    let raw = parse_line(text)?;
    let command = normalize_command(raw);
    if command.is_empty() {
        return None;
    }
    Some(Directive { line, raw: raw.to_string(), command, document: document.clone() })
}

/// Lazy directive iterator over a document's lines.
///
/// Clone an unstarted scan to get an independent pass over the same lines.
#[derive(Debug, Clone)]
pub struct Scan<'a, I> {
    document: &'a DocumentId,
    lines: Option<Enumerate<I>>,
}

impl<I, S> Iterator for Scan<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Directive;

    fn next(&mut self) -> Option<Directive> {
        let lines = self.lines.as_mut()?;
        for (line, text) in lines.by_ref() {
            if let Some(directive) = directive_at(self.document, line, text.as_ref()) {
                return Some(directive);
            }
        }
        self.lines = None;
        None
    }
}

impl<I, S> FusedIterator for Scan<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
}

/// Scan `lines` for directives. A disabled scan yields nothing.
pub fn scan<'a, L>(document: &'a DocumentId, lines: L, enabled: bool) -> Scan<'a, L::IntoIter>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    let lines = enabled.then(|| lines.into_iter().enumerate());
    Scan { document, lines }
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;

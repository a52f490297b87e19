// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action handles: clickable run buttons anchored to directive lines.

use rg_core::{Directive, DocumentId};
use serde::{Deserialize, Serialize};

/// Identifier of the run action handles invoke.
pub const RUN_ACTION: &str = "rungen.runGoGenerate";

/// Label shown on every handle.
pub const RUN_TITLE: &str = "▶ Run";

/// A whole-line span. Columns count UTF-16 code units, as editors do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn whole_line(line: usize, text: &str) -> Self {
        Self { line, start: 0, end: text.encode_utf16().count() }
    }
}

/// Arguments of the run action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunArgs {
    pub command: String,
    pub document: DocumentId,
    /// 1-based line number, for display
    #[serde(default)]
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionHandle {
    pub range: LineRange,
    pub title: String,
    pub action: String,
    pub args: RunArgs,
}

impl ActionHandle {
    /// Build the handle for `directive`, found on a line reading `text`.
    pub fn for_directive(directive: Directive, text: &str) -> Self {
        let line_number = directive.line_number();
        Self {
            range: LineRange::whole_line(directive.line, text),
            title: RUN_TITLE.to_string(),
            action: RUN_ACTION.to_string(),
            args: RunArgs {
                command: directive.command,
                document: directive.document,
                line: Some(line_number),
            },
        }
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-lines protocol spoken by `rungen serve`.
//!
//! Each line is one JSON object with a `"type"` tag. A request may carry an
//! `id`; the response to it echoes the same `id`. Unsolicited messages
//! (`refresh`) carry none.

use std::path::PathBuf;

use rg_core::{ExecutionReport, Language, SessionId};
use rg_engine::ActionHandle;
use serde::{Deserialize, Serialize};

/// A message with an optional correlation id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Envelope<T> {
    pub fn reply(id: Option<u64>, body: T) -> Self {
        Self { id, body }
    }

    pub fn unsolicited(body: T) -> Self {
        Self { id: None, body }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Compute the action handles of a document. Without `text` the file
    /// is read from disk.
    Lenses {
        path: PathBuf,
        #[serde(default)]
        language: Option<Language>,
        #[serde(default)]
        text: Option<String>,
    },
    /// Invoke the run action
    Run {
        command: String,
        path: PathBuf,
        #[serde(default)]
        line: Option<usize>,
    },
    /// The host closed a session
    SessionClosed { session: SessionId },
    /// Toggle `enable_code_lens`
    SetEnabled { enabled: bool },
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Lenses { generation: u64, handles: Vec<ActionHandle> },
    Report { report: ExecutionReport },
    /// Previously returned handles are stale; ask again
    Refresh { generation: u64 },
    Ok,
    Error { message: String },
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;

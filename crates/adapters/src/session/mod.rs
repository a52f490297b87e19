// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session sink adapters.
//!
//! A session is where run transcripts go: the console, a log file, or the
//! host's output pane. The host may close a session behind our back; it
//! reports that with [`SessionEvent::Closed`], and [`SessionAdapter::is_alive`]
//! lets the owner double-check before reuse.

mod console;
mod file;

pub use console::ConsoleSessionAdapter;
pub use file::FileSessionAdapter;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSessionAdapter;

use std::path::Path;

use async_trait::async_trait;
use rg_core::SessionId;
use thiserror::Error;

/// Errors from session adapter operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to open session: {0}")]
    OpenFailed(String),
    #[error("session not found: {0}")]
    NotFound(SessionId),
    #[error("write to session {id} failed: {source}")]
    Write { id: SessionId, source: std::io::Error },
}

/// Lifecycle notifications delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session was closed out-of-band (e.g. the user closed the pane)
    Closed(SessionId),
}

/// Adapter for output sessions
#[async_trait]
pub trait SessionAdapter: Clone + Send + Sync + 'static {
    /// Open a new session named `name`, nominally rooted at `cwd`.
    async fn open(&self, name: &str, cwd: &Path) -> Result<SessionId, SessionError>;

    /// Append a block of text to the session.
    async fn append(&self, id: &SessionId, text: &str) -> Result<(), SessionError>;

    /// Whether the session still accepts input.
    async fn is_alive(&self, id: &SessionId) -> bool;

    /// Dispose of the session.
    async fn close(&self, id: &SessionId) -> Result<(), SessionError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution session manager.
//!
//! Owns the single reusable session runs report into:
//!
//! ```text
//! NoSession ──acquire(dir)──▶ SessionAlive ──acquire(any)──▶ SessionAlive (reused)
//!     ▲                            │
//!     └──── notify_closed(id) ─────┤
//!     └──── teardown() ────────────┘
//! ```
//!
//! A reused session keeps the directory it was created with; runs always
//! pass their own working directory to the process adapter.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rg_adapters::{SessionAdapter, SessionError, SessionEvent};
use rg_core::SessionId;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

/// Name given to the session when it is opened.
pub const SESSION_NAME: &str = "Go Generate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSession {
    pub id: SessionId,
    /// Directory of the run that created the session
    pub working_dir: PathBuf,
}

pub struct SessionManager<S> {
    adapter: S,
    // Held across adapter calls so concurrent acquires open one session.
    current: Mutex<Option<ExecutionSession>>,
}

impl<S: SessionAdapter> SessionManager<S> {
    pub fn new(adapter: S) -> Self {
        Self { adapter, current: Mutex::new(None) }
    }

    pub fn adapter(&self) -> &S {
        &self.adapter
    }

    /// The live session, if any.
    pub async fn current(&self) -> Option<ExecutionSession> {
        self.current.lock().await.clone()
    }

    /// Reuse the live session, or open one rooted at `dir`.
    pub async fn acquire(&self, dir: &Path) -> Result<ExecutionSession, SessionError> {
        let mut current = self.current.lock().await;
        if let Some(session) = current.as_ref() {
            if self.adapter.is_alive(&session.id).await {
                tracing::debug!(session = %session.id, "reusing session");
                return Ok(session.clone());
            }
            tracing::info!(session = %session.id, "session is gone, opening a new one");
            *current = None;
        }

        let id = self.adapter.open(SESSION_NAME, dir).await?;
        tracing::info!(session = %id, dir = %dir.display(), "opened session");
        let session = ExecutionSession { id, working_dir: dir.to_path_buf() };
        *current = Some(session.clone());
        Ok(session)
    }

    /// The host closed session `id`. Returns whether it was the live one.
    pub async fn notify_closed(&self, id: &SessionId) -> bool {
        let mut current = self.current.lock().await;
        match current.as_ref() {
            Some(session) if &session.id == id => {
                tracing::info!(session = %id, "session closed externally");
                *current = None;
                true
            }
            _ => {
                tracing::debug!(session = %id, "ignoring close of stale session");
                false
            }
        }
    }

    /// Dispose of the live session, if any.
    pub async fn teardown(&self) {
        let Some(session) = self.current.lock().await.take() else {
            return;
        };
        match self.adapter.close(&session.id).await {
            Ok(()) => tracing::info!(session = %session.id, "session disposed"),
            Err(e) => tracing::warn!(session = %session.id, error = %e, "failed to dispose session"),
        }
    }

    /// Forward host session events until the channel closes.
    pub fn listen(self: &Arc<Self>, mut events: mpsc::Receiver<SessionEvent>) -> JoinHandle<()> {
        let manager = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    SessionEvent::Closed(id) => {
                        manager.notify_closed(&id).await;
                    }
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

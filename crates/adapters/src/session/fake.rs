// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake session adapter for testing

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rg_core::SessionId;

use super::{SessionAdapter, SessionError};

#[derive(Debug, Clone)]
struct FakeSession {
    name: String,
    cwd: PathBuf,
    transcript: String,
    alive: bool,
}

#[derive(Default)]
struct FakeSessionState {
    sessions: HashMap<SessionId, FakeSession>,
    opened: Vec<SessionId>,
    closed: Vec<SessionId>,
    fail_open: bool,
    fail_append: bool,
}

/// Fake session adapter recording every session it opens.
#[derive(Clone, Default)]
pub struct FakeSessionAdapter {
    inner: Arc<Mutex<FakeSessionState>>,
}

impl FakeSessionAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of every session opened, in order
    pub fn opened(&self) -> Vec<SessionId> {
        self.inner.lock().opened.clone()
    }

    /// Ids passed to `close`, in order
    pub fn closed(&self) -> Vec<SessionId> {
        self.inner.lock().closed.clone()
    }

    /// Everything appended to a session, including the open banner
    pub fn transcript(&self, id: &SessionId) -> String {
        self.inner.lock().sessions.get(id).map(|s| s.transcript.clone()).unwrap_or_default()
    }

    pub fn name(&self, id: &SessionId) -> Option<String> {
        self.inner.lock().sessions.get(id).map(|s| s.name.clone())
    }

    pub fn cwd(&self, id: &SessionId) -> Option<PathBuf> {
        self.inner.lock().sessions.get(id).map(|s| s.cwd.clone())
    }

    /// Simulate the host closing a session out-of-band
    pub fn kill(&self, id: &SessionId) {
        if let Some(session) = self.inner.lock().sessions.get_mut(id) {
            session.alive = false;
        }
    }

    pub fn set_fail_open(&self, fail: bool) {
        self.inner.lock().fail_open = fail;
    }

    pub fn set_fail_append(&self, fail: bool) {
        self.inner.lock().fail_append = fail;
    }
}

#[async_trait]
impl SessionAdapter for FakeSessionAdapter {
    async fn open(&self, name: &str, cwd: &Path) -> Result<SessionId, SessionError> {
        let mut inner = self.inner.lock();
        if inner.fail_open {
            return Err(SessionError::OpenFailed("fake open failure".to_string()));
        }
        let id = SessionId::generate();
        inner.sessions.insert(
            id.clone(),
            FakeSession {
                name: name.to_string(),
                cwd: cwd.to_path_buf(),
                transcript: String::new(),
                alive: true,
            },
        );
        inner.opened.push(id.clone());
        Ok(id)
    }

    async fn append(&self, id: &SessionId, text: &str) -> Result<(), SessionError> {
        let mut inner = self.inner.lock();
        if inner.fail_append {
            return Err(SessionError::Write {
                id: id.clone(),
                source: std::io::Error::other("fake append failure"),
            });
        }
        match inner.sessions.get_mut(id) {
            Some(session) if session.alive => {
                session.transcript.push_str(text);
                Ok(())
            }
            _ => Err(SessionError::NotFound(id.clone())),
        }
    }

    async fn is_alive(&self, id: &SessionId) -> bool {
        self.inner.lock().sessions.get(id).is_some_and(|s| s.alive)
    }

    async fn close(&self, id: &SessionId) -> Result<(), SessionError> {
        let mut inner = self.inner.lock();
        inner.closed.push(id.clone());
        match inner.sessions.get_mut(id) {
            Some(session) => {
                session.alive = false;
                Ok(())
            }
            None => Err(SessionError::NotFound(id.clone())),
        }
    }
}

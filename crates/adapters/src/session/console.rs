// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console session: transcripts go to stderr, keeping stdout for results.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rg_core::SessionId;
use tokio::io::AsyncWriteExt;

use super::{SessionAdapter, SessionError};

#[derive(Clone, Default)]
pub struct ConsoleSessionAdapter {
    open: Arc<Mutex<HashSet<SessionId>>>,
}

impl ConsoleSessionAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionAdapter for ConsoleSessionAdapter {
    async fn open(&self, name: &str, cwd: &Path) -> Result<SessionId, SessionError> {
        let id = SessionId::generate();
        self.open.lock().insert(id.clone());
        tracing::debug!(session = %id, %name, cwd = %cwd.display(), "opened console session");
        self.append(&id, &format!("== {} ({}) ==\n", name, cwd.display())).await?;
        Ok(id)
    }

    async fn append(&self, id: &SessionId, text: &str) -> Result<(), SessionError> {
        if !self.open.lock().contains(id) {
            return Err(SessionError::NotFound(id.clone()));
        }
        let mut stderr = tokio::io::stderr();
        stderr
            .write_all(text.as_bytes())
            .await
            .map_err(|source| SessionError::Write { id: id.clone(), source })?;
        stderr.flush().await.map_err(|source| SessionError::Write { id: id.clone(), source })
    }

    async fn is_alive(&self, id: &SessionId) -> bool {
        self.open.lock().contains(id)
    }

    async fn close(&self, id: &SessionId) -> Result<(), SessionError> {
        if self.open.lock().remove(id) {
            Ok(())
        } else {
            Err(SessionError::NotFound(id.clone()))
        }
    }
}

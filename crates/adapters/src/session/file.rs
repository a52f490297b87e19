// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log-file session: transcripts are appended to a file.
//!
//! Deleting the file closes the session; the next run starts a new one.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rg_core::SessionId;
use tokio::io::AsyncWriteExt;

use super::{SessionAdapter, SessionError};

#[derive(Clone)]
pub struct FileSessionAdapter {
    path: PathBuf,
    open: Arc<Mutex<HashSet<SessionId>>>,
}

impl FileSessionAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), open: Arc::new(Mutex::new(HashSet::new())) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(&self, id: &SessionId, text: &str) -> Result<(), SessionError> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|source| SessionError::Write { id: id.clone(), source })?;
        file.write_all(text.as_bytes())
            .await
            .map_err(|source| SessionError::Write { id: id.clone(), source })
    }
}

#[async_trait]
impl SessionAdapter for FileSessionAdapter {
    async fn open(&self, name: &str, cwd: &Path) -> Result<SessionId, SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                SessionError::OpenFailed(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
        let id = SessionId::generate();
        self.write(&id, &format!("== {} [{}] ({}) ==\n", name, id, cwd.display()))
            .await
            .map_err(|e| SessionError::OpenFailed(e.to_string()))?;
        self.open.lock().insert(id.clone());
        tracing::debug!(session = %id, path = %self.path.display(), "opened file session");
        Ok(id)
    }

    async fn append(&self, id: &SessionId, text: &str) -> Result<(), SessionError> {
        if !self.is_alive(id).await {
            return Err(SessionError::NotFound(id.clone()));
        }
        self.write(id, text).await
    }

    async fn is_alive(&self, id: &SessionId) -> bool {
        if !self.open.lock().contains(id) {
            return false;
        }
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    async fn close(&self, id: &SessionId) -> Result<(), SessionError> {
        if self.open.lock().remove(id) {
            Ok(())
        } else {
            Err(SessionError::NotFound(id.clone()))
        }
    }
}

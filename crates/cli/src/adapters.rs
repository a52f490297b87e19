// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter selection from settings.
//!
//! The runner is generic over its adapters; these enums pick the concrete
//! sink once at startup without boxing.

use std::path::Path;

use async_trait::async_trait;
use rg_adapters::{
    ConsoleNotifyAdapter, ConsoleSessionAdapter, DesktopNotifyAdapter, FileSessionAdapter,
    NotifyAdapter, NotifyError, SessionAdapter, SessionError,
};
use rg_core::{AlertKind, SessionId, Settings};

/// Where alerts go
#[derive(Clone, Debug)]
pub enum AlertSink {
    Console(ConsoleNotifyAdapter),
    Desktop(DesktopNotifyAdapter),
}

impl AlertSink {
    pub fn from_settings(settings: &Settings) -> Self {
        match settings.alerts {
            AlertKind::Console => AlertSink::Console(ConsoleNotifyAdapter),
            AlertKind::Desktop => AlertSink::Desktop(DesktopNotifyAdapter::new()),
        }
    }
}

#[async_trait]
impl NotifyAdapter for AlertSink {
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        match self {
            AlertSink::Console(adapter) => adapter.notify(title, message).await,
            AlertSink::Desktop(adapter) => adapter.notify(title, message).await,
        }
    }
}

/// Where session transcripts go
#[derive(Clone)]
pub enum SessionSink {
    Console(ConsoleSessionAdapter),
    File(FileSessionAdapter),
}

impl SessionSink {
    pub fn from_settings(settings: &Settings) -> Self {
        match &settings.session_log {
            Some(path) => SessionSink::File(FileSessionAdapter::new(path)),
            None => SessionSink::Console(ConsoleSessionAdapter::new()),
        }
    }
}

#[async_trait]
impl SessionAdapter for SessionSink {
    async fn open(&self, name: &str, cwd: &Path) -> Result<SessionId, SessionError> {
        match self {
            SessionSink::Console(adapter) => adapter.open(name, cwd).await,
            SessionSink::File(adapter) => adapter.open(name, cwd).await,
        }
    }

    async fn append(&self, id: &SessionId, text: &str) -> Result<(), SessionError> {
        match self {
            SessionSink::Console(adapter) => adapter.append(id, text).await,
            SessionSink::File(adapter) => adapter.append(id, text).await,
        }
    }

    async fn is_alive(&self, id: &SessionId) -> bool {
        match self {
            SessionSink::Console(adapter) => adapter.is_alive(id).await,
            SessionSink::File(adapter) => adapter.is_alive(id).await,
        }
    }

    async fn close(&self, id: &SessionId) -> Result<(), SessionError> {
        match self {
            SessionSink::Console(adapter) => adapter.close(id).await,
            SessionSink::File(adapter) => adapter.close(id).await,
        }
    }
}

#[cfg(test)]
#[path = "adapters_tests.rs"]
mod tests;

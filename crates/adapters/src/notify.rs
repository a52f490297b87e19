// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing alert channel.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from notify operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Adapter for sending alerts
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    /// Send an alert with a title and message body
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError>;
}

/// Alerts printed to stderr, for terminal use.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifyAdapter;

#[async_trait]
impl NotifyAdapter for ConsoleNotifyAdapter {
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        use tokio::io::AsyncWriteExt;
        let line = format!("{}: {}\n", title, message);
        tokio::io::stderr()
            .write_all(line.as_bytes())
            .await
            .map_err(|e| NotifyError::SendFailed(e.to_string()))
    }
}

/// Desktop notification adapter using notify-rust.
///
/// On macOS, `notify-rust` looks up a bundle identifier through AppleScript on
/// first use, which blocks forever without Automation permissions. The
/// identifier is pre-set at construction time to skip the lookup.
#[derive(Clone, Copy, Debug, Default)]
pub struct DesktopNotifyAdapter;

impl DesktopNotifyAdapter {
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        {
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self
    }
}

#[async_trait]
impl NotifyAdapter for DesktopNotifyAdapter {
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        let title = title.to_string();
        let message = message.to_string();
        // show() is synchronous on some platforms; keep it off the runtime.
        tokio::task::spawn_blocking(move || {
            tracing::info!(%title, %message, "sending desktop notification");
            match notify_rust::Notification::new().summary(&title).body(&message).show() {
                Ok(_) => {
                    tracing::debug!(%title, "desktop notification sent");
                }
                Err(e) => {
                    tracing::warn!(%title, error = %e, "desktop notification failed");
                }
            }
        });
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{NotifyAdapter, NotifyError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Recorded notification
    #[derive(Debug, Clone)]
    pub struct NotifyCall {
        pub title: String,
        pub message: String,
    }

    #[derive(Default)]
    struct FakeNotifyState {
        calls: Vec<NotifyCall>,
        fail: bool,
    }

    /// Fake notification adapter for testing
    #[derive(Clone, Default)]
    pub struct FakeNotifyAdapter {
        inner: Arc<Mutex<FakeNotifyState>>,
    }

    impl FakeNotifyAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded notifications
        pub fn calls(&self) -> Vec<NotifyCall> {
            self.inner.lock().calls.clone()
        }

        /// Make every notify call fail (after recording it)
        pub fn set_fail(&self, fail: bool) {
            self.inner.lock().fail = fail;
        }
    }

    #[async_trait]
    impl NotifyAdapter for FakeNotifyAdapter {
        async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
            let mut inner = self.inner.lock();
            inner.calls.push(NotifyCall { title: title.to_string(), message: message.to_string() });
            if inner.fail {
                return Err(NotifyError::SendFailed("fake failure".to_string()));
            }
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifyAdapter, NotifyCall};

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution adapter.
//!
//! Runs a command string through `sh -c` in a working directory, bounded by
//! a timeout. Exit status is reported, not judged: the runner decides what a
//! non-zero exit means.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::subprocess::{run_with_timeout, SubprocessError};

/// Captured result of a process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self { stdout: stdout.into(), stderr: String::new(), exit_code: Some(0) }
    }
}

/// Errors from process execution
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("timed out after {}ms", .timeout.as_millis())]
    TimedOut { timeout: Duration },
    #[error("{message}")]
    Failed { stdout: Option<String>, stderr: Option<String>, message: String },
}

/// Adapter for running shell commands
#[async_trait]
pub trait ProcessAdapter: Clone + Send + Sync + 'static {
    async fn execute(
        &self,
        command: &str,
        cwd: &Path,
        timeout: Duration,
    ) -> Result<ProcessOutput, ProcessError>;
}

/// Runs commands with `sh -c`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellProcessAdapter;

#[async_trait]
impl ProcessAdapter for ShellProcessAdapter {
    async fn execute(
        &self,
        command: &str,
        cwd: &Path,
        timeout: Duration,
    ) -> Result<ProcessOutput, ProcessError> {
        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg("-c").arg(command).current_dir(cwd);

        match run_with_timeout(cmd, timeout, "go:generate command").await {
            Ok(output) => Ok(ProcessOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code: output.status.code(),
            }),
            Err(SubprocessError::TimedOut { timeout, .. }) => Err(ProcessError::TimedOut { timeout }),
            Err(e) => Err(ProcessError::Failed { stdout: None, stderr: None, message: e.to_string() }),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ProcessAdapter, ProcessError, ProcessOutput};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::time::Duration;

    /// Recorded execute call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ProcessCall {
        pub command: String,
        pub cwd: PathBuf,
        pub timeout: Duration,
    }

    #[derive(Default)]
    struct FakeProcessState {
        calls: Vec<ProcessCall>,
        responses: VecDeque<Result<ProcessOutput, ProcessError>>,
        delay: Option<Duration>,
    }

    /// Fake process adapter with scripted responses.
    ///
    /// Unscripted calls succeed with empty output.
    #[derive(Clone, Default)]
    pub struct FakeProcessAdapter {
        inner: Arc<Mutex<FakeProcessState>>,
    }

    impl FakeProcessAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the result of the next unanswered call
        pub fn respond(&self, response: Result<ProcessOutput, ProcessError>) {
            self.inner.lock().responses.push_back(response);
        }

        /// Make every call sleep before answering
        pub fn set_delay(&self, delay: Duration) {
            self.inner.lock().delay = Some(delay);
        }

        /// Get all recorded calls
        pub fn calls(&self) -> Vec<ProcessCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl ProcessAdapter for FakeProcessAdapter {
        async fn execute(
            &self,
            command: &str,
            cwd: &Path,
            timeout: Duration,
        ) -> Result<ProcessOutput, ProcessError> {
            let (response, delay) = {
                let mut inner = self.inner.lock();
                inner.calls.push(ProcessCall {
                    command: command.to_string(),
                    cwd: cwd.to_path_buf(),
                    timeout,
                });
                (inner.responses.pop_front(), inner.delay)
            };
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            response.unwrap_or_else(|| Ok(ProcessOutput::success("")))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcessAdapter, ProcessCall};

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;

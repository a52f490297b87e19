// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command runner: one directive run, start to report.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rg_adapters::{NotifyAdapter, ProcessAdapter, ProcessError, ProcessOutput, SessionAdapter};
use rg_core::{Clock, ExecutionReport, Outcome, WorkspaceFolders, GENERATE_TIMEOUT};

use crate::action::RunArgs;
use crate::session::{ExecutionSession, SessionManager};
use crate::settings::SettingsStore;

const ALERT_TITLE: &str = "go:generate";
const FAILURE_TITLE: &str = "go:generate failed";

/// Adapters the runner talks to
pub struct RunnerDeps<P, S, N> {
    pub process: P,
    pub sessions: Arc<SessionManager<S>>,
    pub notifier: N,
}

/// Runs commands and reports how they went.
///
/// There is no run queue: concurrent runs share the session and their
/// transcripts may interleave.
pub struct Runner<P, S, N, C: Clock> {
    process: P,
    sessions: Arc<SessionManager<S>>,
    notifier: N,
    settings: SettingsStore,
    clock: C,
    timeout: Duration,
}

impl<P, S, N, C> Runner<P, S, N, C>
where
    P: ProcessAdapter,
    S: SessionAdapter,
    N: NotifyAdapter,
    C: Clock,
{
    pub fn new(deps: RunnerDeps<P, S, N>, settings: SettingsStore, clock: C) -> Self {
        Self {
            process: deps.process,
            sessions: deps.sessions,
            notifier: deps.notifier,
            settings,
            clock,
            timeout: GENERATE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn sessions(&self) -> &Arc<SessionManager<S>> {
        &self.sessions
    }

    /// The run action: resolve the document's workspace folder, then run.
    pub async fn run_directive(&self, args: &RunArgs) -> ExecutionReport {
        let folders = WorkspaceFolders::new(self.settings.current().workspace_folders);
        let working_dir = folders.resolve(&args.document).map(Path::to_path_buf);
        match working_dir {
            Some(cwd) => self.run(&args.command, Some(cwd.as_path()), args.line).await,
            None => {
                tracing::debug!(document = %args.document, "document is outside every workspace folder");
                self.skip(&args.command, args.line, args.document.as_path().parent()).await
            }
        }
    }

    /// Run `command` in `working_dir`. Without a directory nothing is run
    /// and the report says `EnvironmentMissing`.
    pub async fn run(
        &self,
        command: &str,
        working_dir: Option<&Path>,
        line: Option<usize>,
    ) -> ExecutionReport {
        let Some(cwd) = working_dir else {
            return self.skip(command, line, None).await;
        };
        let started_at = self.clock.utc_now();
        let start = self.clock.now();

        let session = match self.sessions.acquire(cwd).await {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "no session available, running without transcript");
                None
            }
        };

        tracing::info!(command, cwd = %cwd.display(), %started_at, ?line, "running go:generate");
        let header = format!(
            "[{}] $ {}\n    in {}\n",
            started_at.format("%H:%M:%S"),
            command,
            cwd.display()
        );
        self.append(session.as_ref(), &header).await;

        let outcome = classify(self.process.execute(command, cwd, self.timeout).await);
        let elapsed_ms = self.clock.now().saturating_duration_since(start).as_millis() as u64;
        let report = ExecutionReport {
            command: command.to_string(),
            working_dir: Some(cwd.to_path_buf()),
            line,
            started_at,
            elapsed_ms,
            outcome,
        };

        if report.outcome.is_success() {
            tracing::info!(command, elapsed_ms, "go:generate succeeded");
        } else {
            tracing::warn!(command, elapsed_ms, outcome = report.outcome.label(), "go:generate did not succeed");
        }
        self.append(session.as_ref(), &report.render()).await;
        self.alert(&report).await;
        report
    }

    /// Report a run that never started for lack of a working directory.
    ///
    /// The report goes to the session like any other: one opened nominally
    /// at `session_root`, or the live one when there is no root.
    async fn skip(
        &self,
        command: &str,
        line: Option<usize>,
        session_root: Option<&Path>,
    ) -> ExecutionReport {
        let report = ExecutionReport {
            command: command.to_string(),
            working_dir: None,
            line,
            started_at: self.clock.utc_now(),
            elapsed_ms: 0,
            outcome: Outcome::EnvironmentMissing,
        };
        tracing::warn!(command, "no workspace folder found, run skipped");

        let session = match session_root {
            Some(root) => match self.sessions.acquire(root).await {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!(error = %e, "no session available for the skipped run");
                    None
                }
            },
            None => self.sessions.current().await,
        };
        self.append(session.as_ref(), &report.render()).await;
        self.alert(&report).await;
        report
    }

    async fn append(&self, session: Option<&ExecutionSession>, text: &str) {
        let Some(session) = session else {
            return;
        };
        if let Err(e) = self.sessions.adapter().append(&session.id, text).await {
            tracing::warn!(session = %session.id, error = %e, "failed to write session transcript");
        }
    }

    async fn alert(&self, report: &ExecutionReport) {
        let (title, message) = match report.failure_summary() {
            Some(summary) => (FAILURE_TITLE, summary),
            None if self.settings.current().notify_on_success => {
                (ALERT_TITLE, report.success_message())
            }
            None => return,
        };
        if let Err(e) = self.notifier.notify(title, &message).await {
            tracing::warn!(error = %e, "failed to send alert");
        }
    }
}

/// Map a process result onto a run outcome.
fn classify(result: Result<ProcessOutput, ProcessError>) -> Outcome {
    match result {
        Ok(ProcessOutput { stdout, stderr, exit_code: Some(0) }) => Outcome::Succeeded { stdout, stderr },
        Ok(ProcessOutput { stdout, stderr, exit_code }) => {
            let message = match exit_code {
                Some(code) => format!("exit status {}", code),
                None => "terminated by signal".to_string(),
            };
            Outcome::Failed { stdout: Some(stdout), stderr: Some(stderr), message }
        }
        Err(ProcessError::TimedOut { timeout }) => {
            Outcome::TimedOut { timeout_ms: timeout.as_millis() as u64 }
        }
        Err(ProcessError::Failed { stdout, stderr, message }) => {
            Outcome::Failed { stdout, stderr, message }
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

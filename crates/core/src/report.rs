// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution reports: the immutable record of one directive run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Duration;

/// Fixed upper bound for a single generator run.
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(30);

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Exit status 0. Generators often chat on stderr, so it is kept but
    /// does not count as failure.
    Succeeded { stdout: String, stderr: String },
    /// Non-zero exit or spawn error
    Failed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stdout: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stderr: Option<String>,
        message: String,
    },
    TimedOut { timeout_ms: u64 },
    /// No workspace folder contains the document; nothing was run
    EnvironmentMissing,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded { .. })
    }

    /// Short lowercase label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Succeeded { .. } => "succeeded",
            Outcome::Failed { .. } => "failed",
            Outcome::TimedOut { .. } => "timed out",
            Outcome::EnvironmentMissing => "environment missing",
        }
    }
}

/// Record of one run, handed to presentation and then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub command: String,
    pub working_dir: Option<PathBuf>,
    /// 1-based line of the originating directive, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub outcome: Outcome,
}

impl ExecutionReport {
    /// One-line summary for the alert channel. `None` for successful runs.
    pub fn failure_summary(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Succeeded { .. } => None,
            Outcome::Failed { message, .. } => {
                Some(format!("Failed to run `{}`: {}", self.command, message))
            }
            Outcome::TimedOut { timeout_ms } => Some(format!(
                "`{}` timed out after {}",
                self.command,
                format_ms(*timeout_ms)
            )),
            Outcome::EnvironmentMissing => Some("No workspace folder found for the file".to_string()),
        }
    }

    /// Informational message for a successful run.
    pub fn success_message(&self) -> String {
        match self.line {
            Some(line) => format!("Ran command from line {}: {}", line, self.command),
            None => format!("Ran: {}", self.command),
        }
    }

    /// Full text block appended to the session after the run.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "[{}] {} in {}: {}",
            self.started_at.format("%H:%M:%S"),
            self.outcome.label(),
            format_ms(self.elapsed_ms),
            self.command
        );
        match &self.outcome {
            Outcome::Succeeded { stdout, stderr } => {
                push_stream(&mut out, "stdout", Some(stdout));
                push_stream(&mut out, "stderr", Some(stderr));
            }
            Outcome::Failed { stdout, stderr, message } => {
                push_stream(&mut out, "stdout", stdout.as_deref());
                push_stream(&mut out, "stderr", stderr.as_deref());
                let _ = writeln!(out, "error: {}", message);
            }
            Outcome::TimedOut { timeout_ms } => {
                let _ = writeln!(out, "error: killed after {}", format_ms(*timeout_ms));
            }
            Outcome::EnvironmentMissing => {
                let _ = writeln!(out, "error: no workspace folder found for the file");
            }
        }
        out
    }
}

fn push_stream(out: &mut String, name: &str, text: Option<&str>) {
    let Some(text) = text.map(str::trim_end).filter(|t| !t.is_empty()) else {
        return;
    };
    let _ = writeln!(out, "--- {} ---", name);
    let _ = writeln!(out, "{}", text);
}

fn format_ms(ms: u64) -> String {
    if ms >= 1000 && ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        format!("{}ms", ms)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

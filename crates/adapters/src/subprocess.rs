// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child process execution with a hard timeout.

use std::process::{Output, Stdio};
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum SubprocessError {
    #[error("failed to spawn {description}: {source}")]
    Spawn { description: String, source: std::io::Error },
    #[error("failed waiting for {description}: {source}")]
    Wait { description: String, source: std::io::Error },
    #[error("{description} timed out after {}ms", .timeout.as_millis())]
    TimedOut { description: String, timeout: Duration },
}

/// Run `cmd` to completion, capturing stdout and stderr.
///
/// The child's output future races a timer. On Unix the child leads its own
/// process group, and a timeout kills the whole group so nothing it spawned
/// outlives the run. Elsewhere `kill_on_drop` only reaches the child itself.
pub async fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<Output, SubprocessError> {
    cmd.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped()).kill_on_drop(true);
    #[cfg(unix)]
    cmd.process_group(0);

    let child = cmd
        .spawn()
        .map_err(|source| SubprocessError::Spawn { description: description.to_string(), source })?;
    let pid = child.id();

    match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(source)) => Err(SubprocessError::Wait { description: description.to_string(), source }),
        Err(_) => {
            tracing::warn!(description, timeout_ms = timeout.as_millis() as u64, "subprocess timed out");
            if let Some(pid) = pid {
                kill_group(pid);
            }
            Err(SubprocessError::TimedOut { description: description.to_string(), timeout })
        }
    }
}

#[cfg(unix)]
fn kill_group(pid: u32) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    let Ok(raw) = i32::try_from(pid) else {
        return;
    };
    // ESRCH just means the group already exited
    if let Err(e) = killpg(Pid::from_raw(raw), Signal::SIGKILL) {
        tracing::debug!(pid, error = %e, "process group already gone");
    }
}

#[cfg(not(unix))]
fn kill_group(_pid: u32) {}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;

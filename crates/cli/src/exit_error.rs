// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, so `main()` stays the only place the process terminates.

use std::fmt;

use rg_core::Outcome;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Exit status for a run that did not succeed, or `None` on success.
    ///
    /// The failure itself has already been reported through the alert
    /// channel, so the message is left empty.
    pub fn for_outcome(outcome: &Outcome) -> Option<Self> {
        match outcome {
            Outcome::Succeeded { .. } => None,
            Outcome::Failed { .. } | Outcome::TimedOut { .. } => Some(Self::new(1, "")),
            Outcome::EnvironmentMissing => Some(Self::new(2, "")),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;

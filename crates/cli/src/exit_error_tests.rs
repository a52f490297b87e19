// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use rg_core::Outcome;
use yare::parameterized;

use super::ExitError;

#[parameterized(
    failed = { Outcome::Failed { stdout: None, stderr: None, message: "exit status 3".into() }, Some(1) },
    timed_out = { Outcome::TimedOut { timeout_ms: 30_000 }, Some(1) },
    no_workspace = { Outcome::EnvironmentMissing, Some(2) },
    succeeded = { Outcome::Succeeded { stdout: String::new(), stderr: String::new() }, None },
)]
fn exit_code_for_outcome(outcome: Outcome, expected: Option<i32>) {
    assert_eq!(ExitError::for_outcome(&outcome).map(|e| e.code), expected);
}

#[test]
fn display_is_the_message() {
    let err = ExitError::new(2, "no directive on line 4");
    assert_eq!(err.to_string(), "no directive on line 4");
}

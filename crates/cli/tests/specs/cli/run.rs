//! `rungen run` specs
//!
//! Verify directives run in the workspace folder and exit codes map outcomes.

use crate::prelude::*;

#[test]
fn runs_directive_in_workspace_folder() {
    let temp = Project::empty();
    let file = temp.file("pkg/gen.go", "package pkg\n\n//go:generate touch generated.txt\n");

    temp.rg()
        .arg("run")
        .arg(&file)
        .args(&["--line", "3"])
        .passes()
        .stdout_eq("succeeded: touch generated.txt\n");

    // The workspace root, not the file's directory
    assert!(temp.path().join("generated.txt").exists());
    assert!(!temp.path().join("pkg/generated.txt").exists());
}

#[test]
fn innermost_workspace_folder_wins() {
    let temp = Project::empty();
    let file = temp.file("svc/api/gen.go", "//go:generate touch here.txt\n");
    let outer = temp.path();
    let inner = temp.path().join("svc");

    temp.rg()
        .arg("-w")
        .arg(&outer)
        .arg("-w")
        .arg(&inner)
        .arg("run")
        .arg(&file)
        .args(&["--line", "1"])
        .passes();

    assert!(inner.join("here.txt").exists());
    assert!(!outer.join("here.txt").exists());
}

#[test]
fn quoted_flags_reach_the_shell() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "//go:generate sh -c 'echo $0 > out.txt' --name=with space\n");
    // Normalization quotes the value: --name="with", leaving `space` separate
    temp.rg().arg("run").arg(&file).args(&["--line", "1"]).passes();

    let out = std::fs::read_to_string(temp.path().join("out.txt")).expect("out.txt written");
    assert_eq!(out.trim(), "--name=with");
}

#[test]
fn failing_command_exits_one_and_alerts() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "//go:generate sh -c \"echo boom >&2; exit 3\"\n");

    temp.rg()
        .arg("run")
        .arg(&file)
        .args(&["--line", "1"])
        .exits_with(1)
        .stdout_has("failed:")
        .stderr_has("go:generate failed")
        .stderr_has("exit status 3")
        .stderr_has("boom");
}

#[test]
fn file_outside_workspace_exits_two_without_running() {
    let workspace = Project::empty();
    let elsewhere = Project::empty();
    let file = elsewhere.file("gen.go", "//go:generate touch nope.txt\n");

    workspace
        .rg()
        .arg("run")
        .arg(&file)
        .args(&["--line", "1"])
        .exits_with(2)
        .stderr_has("No workspace folder found for the file");

    assert!(!workspace.path().join("nope.txt").exists());
    assert!(!elsewhere.path().join("nope.txt").exists());
}

#[test]
fn line_without_directive_is_an_error() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "package main\n");
    temp.rg()
        .arg("run")
        .arg(&file)
        .args(&["--line", "1"])
        .exits_with(1)
        .stderr_has("no go:generate directive on line 1");
}

#[test]
fn explicit_command_with_json_report() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "package main\n");

    let report = temp
        .rg()
        .arg("run")
        .arg(&file)
        .args(&["--command", "printf out; printf err >&2", "--json"])
        .passes()
        .json();

    assert_eq!(report["command"], "printf out; printf err >&2");
    assert_eq!(report["working_dir"], temp.path().to_str().unwrap());
    assert_eq!(report["outcome"]["status"], "succeeded");
    assert_eq!(report["outcome"]["stdout"], "out");
    assert_eq!(report["outcome"]["stderr"], "err");
    assert!(report.get("line").is_none());
}

#[test]
fn session_transcript_goes_to_log_file() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "//go:generate echo transcript-marker\n");
    let log = temp.path().join("logs/session.log");

    temp.rg()
        .env("RUNGEN_SESSION_LOG", &log)
        .arg("run")
        .arg(&file)
        .args(&["--line", "1"])
        .passes();

    let transcript = std::fs::read_to_string(&log).expect("session log written");
    assert!(transcript.contains("Go Generate"), "{transcript}");
    assert!(transcript.contains("$ echo transcript-marker"), "{transcript}");
    assert!(transcript.contains("--- stdout ---\ntranscript-marker"), "{transcript}");
}

#[test]
fn success_alert_is_opt_in() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "//go:generate true\n");
    let config = temp.file("config.toml", "notify_on_success = true\n");

    temp.rg()
        .arg("--config")
        .arg(&config)
        .arg("run")
        .arg(&file)
        .args(&["--line", "1"])
        .passes()
        .stderr_has("Ran command from line 1: true");
}

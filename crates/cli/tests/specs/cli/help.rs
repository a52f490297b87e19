//! CLI help output specs

use crate::prelude::*;

#[test]
fn rungen_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn rungen_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("lenses")
        .stdout_has("run")
        .stdout_has("serve");
}

#[test]
fn rungen_run_help_shows_flags() {
    cli().args(&["run", "--help"]).passes().stdout_has("--line").stdout_has("--command");
}

#[test]
fn rungen_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn run_needs_line_or_command() {
    let temp = Project::empty();
    let file = temp.file("gen.go", "//go:generate echo hi\n");
    temp.rg().arg("run").arg(&file).exits_with(2).stderr_has("--line");
}

//! Shared fixtures: temp projects and a fluent wrapper over the binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub use serde_json::{json, Value};

/// A throwaway workspace directory
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    /// Canonical root, so paths compare equal to what the binary resolves
    pub fn path(&self) -> PathBuf {
        self.dir.path().canonicalize().expect("canonicalize temp dir")
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    /// `rungen` run from the project root with no user config.
    pub fn rg(&self) -> CliBuilder {
        cli().pwd(&self.path()).env("RUNGEN_CONFIG", self.path().join(".no-config.toml"))
    }
}

pub fn cli() -> CliBuilder {
    let mut cmd = assert_cmd::Command::cargo_bin("rungen").expect("rungen binary");
    cmd.env_remove("RUNGEN_LOG")
        .env_remove("RUNGEN_ENABLE_CODE_LENS")
        .env_remove("RUNGEN_SESSION_LOG");
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn arg(mut self, arg: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.arg(arg);
        self
    }

    pub fn pwd(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.cmd.write_stdin(input);
        self
    }

    pub fn passes(self) -> RunOutput {
        self.exits_with(0)
    }

    pub fn exits_with(mut self, code: i32) -> RunOutput {
        let output = RunOutput::from(self.cmd.output().expect("run rungen"));
        assert_eq!(output.code, Some(code), "unexpected exit status\n{}", output.describe());
        output
    }
}

pub struct RunOutput {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

impl From<std::process::Output> for RunOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunOutput {
    fn describe(&self) -> String {
        format!("--- stdout ---\n{}\n--- stderr ---\n{}", self.stdout, self.stderr)
    }

    pub fn stdout(&self) -> String {
        self.stdout.clone()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout lacks {:?}\n{}", needle, self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr lacks {:?}\n{}", needle, self.describe());
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout.as_str(), expected);
        self
    }

    /// Every stdout line parsed as JSON
    pub fn json_lines(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
            .collect()
    }

    /// All of stdout parsed as one JSON document
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout).expect("stdout is JSON")
    }
}

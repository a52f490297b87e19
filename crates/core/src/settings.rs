// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User settings, read from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid settings {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
}

/// Where failure alerts are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    #[default]
    Console,
    Desktop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Show run actions above directives
    pub enable_code_lens: bool,
    /// Also alert when a run succeeds
    pub notify_on_success: bool,
    pub alerts: AlertKind,
    /// Roots that documents are resolved against; a run's working directory
    /// is the innermost root containing the document.
    pub workspace_folders: Vec<PathBuf>,
    /// Append session output to this file instead of the console
    pub session_log: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_code_lens: true,
            notify_on_success: false,
            alerts: AlertKind::default(),
            workspace_folders: Vec::new(),
            session_log: None,
        }
    }
}

impl Settings {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, SettingsError> {
        toml::from_str(text).map_err(|source| SettingsError::Parse { path: path.to_path_buf(), source })
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(path, &text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(SettingsError::Read { path: path.to_path_buf(), source }),
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

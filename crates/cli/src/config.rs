// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings resolution: file, then environment, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use rg_core::Settings;

use crate::env;

/// Values that take precedence over the settings file
#[derive(Debug, Default)]
pub struct Overrides {
    pub enable_code_lens: Option<bool>,
    pub session_log: Option<PathBuf>,
    /// `--workspace` flags; when non-empty they replace the configured folders
    pub workspaces: Vec<PathBuf>,
}

impl Overrides {
    pub fn from_env(workspaces: Vec<PathBuf>) -> Self {
        Self {
            enable_code_lens: env::enable_code_lens(),
            session_log: env::session_log(),
            workspaces,
        }
    }
}

/// Load settings from `config` (or the default location) and apply overrides.
pub fn load(config: Option<&Path>, overrides: Overrides) -> anyhow::Result<Settings> {
    let settings = match config.map(Path::to_path_buf).or_else(env::config_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading settings");
            Settings::load(&path)?
        }
        None => Settings::default(),
    };
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(apply(settings, overrides, &cwd))
}

/// Apply overrides and make every workspace folder absolute.
///
/// With no folder configured anywhere, `cwd` is the single workspace folder.
pub fn apply(mut settings: Settings, overrides: Overrides, cwd: &Path) -> Settings {
    if let Some(enabled) = overrides.enable_code_lens {
        settings.enable_code_lens = enabled;
    }
    if let Some(log) = overrides.session_log {
        settings.session_log = Some(log);
    }
    if !overrides.workspaces.is_empty() {
        settings.workspace_folders = overrides.workspaces;
    }
    if settings.workspace_folders.is_empty() {
        settings.workspace_folders.push(cwd.to_path_buf());
    }
    settings.workspace_folders =
        settings.workspace_folders.iter().map(|folder| absolute(folder, cwd)).collect();
    settings
}

/// Absolute, symlink-resolved form of `path`.
///
/// A path that does not exist yet is resolved through its parent; failing
/// that it is only joined onto `cwd`.
pub fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };
    if let Ok(resolved) = std::fs::canonicalize(&joined) {
        return resolved;
    }
    match (joined.parent(), joined.file_name()) {
        (Some(parent), Some(name)) => {
            std::fs::canonicalize(parent).map(|p| p.join(name)).unwrap_or(joined)
        }
        _ => joined,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

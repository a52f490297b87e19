// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Default log filter when `RUNGEN_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolve the settings file: RUNGEN_CONFIG > XDG config dir/rungen/config.toml
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("RUNGEN_CONFIG").filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("rungen").join("config.toml"))
}

/// Log filter directive (`RUNGEN_LOG`), in `EnvFilter` syntax
pub fn log_filter() -> String {
    std::env::var("RUNGEN_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Override for `enable_code_lens`. Unparseable values are ignored.
pub fn enable_code_lens() -> Option<bool> {
    std::env::var("RUNGEN_ENABLE_CODE_LENS").ok().and_then(|s| parse_bool(&s))
}

/// Override for the session transcript file
pub fn session_log() -> Option<PathBuf> {
    std::env::var_os("RUNGEN_SESSION_LOG").filter(|p| !p.is_empty()).map(PathBuf::from)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command normalization: quote `--flag=value` values for the shell.

use regex::Regex;
use std::sync::LazyLock;

/// `--name=value` where name is letters/underscores and value runs to the
/// next whitespace.
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static FLAG_VALUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(--[a-zA-Z_]+=)(\S+)").expect("constant regex pattern is valid")
});

/// Wrap every `--name=value` value in double quotes in a single pass.
///
/// Values that are already quoted get quoted again, and a value containing
/// `=` is quoted as a whole (`--data=a=b` becomes `--data="a=b"`).
pub fn normalize_command(raw: &str) -> String {
    FLAG_VALUE_PATTERN.replace_all(raw, r#"${1}"${2}""#).into_owned()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;

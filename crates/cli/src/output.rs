// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt::Write as _;

use rg_core::ExecutionReport;
use rg_engine::ActionHandle;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// One line per handle: `line: title  command`
pub fn format_handles(handles: &[ActionHandle]) -> String {
    if handles.is_empty() {
        return "No go:generate directives\n".to_string();
    }
    let width = handles
        .iter()
        .filter_map(|h| h.args.line)
        .max()
        .map_or(1, |line| line.to_string().len());
    let mut out = String::new();
    for handle in handles {
        let line = handle.args.line.unwrap_or(handle.range.line + 1);
        let _ = writeln!(out, "{:>width$}: {}  {}", line, handle.title, handle.args.command);
    }
    out
}

/// `label: command`, the one-line result of a run
pub fn format_report(report: &ExecutionReport) -> String {
    format!("{}: {}\n", report.outcome.label(), report.command)
}

pub fn print_handles(handles: &[ActionHandle], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(handles)?),
        OutputFormat::Text => print!("{}", format_handles(handles)),
    }
    Ok(())
}

pub fn print_report(report: &ExecutionReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => print!("{}", format_report(report)),
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use rg_core::{DocumentId, SourceDocument};
use rg_engine::{project, RunArgs};

use crate::app::App;
use crate::exit_error::ExitError;
use crate::output::{print_report, OutputFormat};

/// What to run from the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The directive on this 1-based line
    Line(usize),
    /// A command given verbatim, as a host invoking the run action would
    Command(String),
}

pub async fn handle(
    app: &App,
    file: &Path,
    target: Target,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let args = run_args(file, target)?;
    let report = app.runner.run_directive(&args).await;
    app.shutdown().await;

    print_report(&report, format)?;
    match ExitError::for_outcome(&report.outcome) {
        Some(exit) => Err(exit.into()),
        None => Ok(()),
    }
}

/// Build the run action's arguments.
///
/// A line target is looked up regardless of `enable_code_lens`: the setting
/// hides handles, it does not disable running.
pub fn run_args(file: &Path, target: Target) -> anyhow::Result<RunArgs> {
    match target {
        Target::Command(command) => {
            Ok(RunArgs { command, document: DocumentId::new(file), line: None })
        }
        Target::Line(line) => {
            let document = SourceDocument::load(file)?;
            project(&document, true)
                .into_iter()
                .find(|handle| handle.args.line == Some(line))
                .map(|handle| handle.args)
                .ok_or_else(|| {
                    ExitError::new(
                        1,
                        format!("no go:generate directive on line {} of {}", line, file.display()),
                    )
                    .into()
                })
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

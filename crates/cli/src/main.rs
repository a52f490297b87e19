// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rungen: run `//go:generate` directives from the command line or a host

mod adapters;
mod app;
mod commands;
mod config;
mod env;
mod exit_error;
mod output;
mod protocol;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::App;
use crate::commands::run::Target;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "rungen", version, about = "Run //go:generate directives")]
struct Cli {
    /// Settings file [default: $RUNGEN_CONFIG, then the user config dir]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Workspace folder; repeat for several [default: current directory]
    #[arg(short, long = "workspace", global = true, value_name = "DIR")]
    workspaces: Vec<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the run actions of a file
    Lenses {
        file: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run one directive
    Run {
        file: PathBuf,
        /// 1-based line of the directive to run
        #[arg(long, conflicts_with = "command", required_unless_present = "command")]
        line: Option<usize>,
        /// Run this command as if invoked from the file
        #[arg(long)]
        command: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Speak the JSON-lines host protocol on stdin/stdout
    Serve,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(cli).await {
        if let Some(exit) = e.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("Error: {}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let overrides = config::Overrides::from_env(cli.workspaces);
    let settings = config::load(cli.config.as_deref(), overrides)?;
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let app = App::new(settings);

    match command {
        Commands::Lenses { file, json } => commands::lenses::handle(
            &app,
            &config::absolute(&file, &cwd),
            OutputFormat::from_json_flag(json),
        ),
        Commands::Run { file, line, command, json } => {
            let target = match (line, command) {
                (_, Some(command)) => Target::Command(command),
                (Some(line), None) => Target::Line(line),
                (None, None) => return Err(ExitError::new(1, "either --line or --command is required").into()),
            };
            commands::run::handle(
                &app,
                &config::absolute(&file, &cwd),
                target,
                OutputFormat::from_json_flag(json),
            )
            .await
        }
        Commands::Serve => commands::serve::handle(app, cwd).await,
    }
}

/// Log to stderr; stdout carries command output and protocol messages.
fn init_logging() {
    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .ok();
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rungen serve`: the engine behind a JSON-lines pipe.
//!
//! Requests are read one line at a time. Lenses and settings requests are
//! answered inline; runs are spawned so a slow generator never blocks the
//! reader. Every response goes through one writer task, so lines are never
//! interleaved.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rg_core::{Language, SourceDocument};
use rg_engine::RunArgs;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::app::App;
use crate::config;
use crate::protocol::{Envelope, Request, Response};

const OUTBOX_CAPACITY: usize = 64;

pub async fn handle(app: App, cwd: PathBuf) -> anyhow::Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    serve(app, cwd, stdin, tokio::io::stdout()).await
}

/// Serve requests from `input` until `shutdown` or end of input.
///
/// Request paths are resolved against `cwd` and canonicalized the same way
/// workspace folders are.
pub async fn serve<R, W>(app: App, cwd: PathBuf, input: R, output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (outbox, inbox) = mpsc::channel::<Envelope<Response>>(OUTBOX_CAPACITY);
    let writer = tokio::spawn(write_responses(inbox, output));

    let settings_task = app.projector.watch_settings();
    let refresh_task = {
        let mut generations = app.projector.subscribe();
        let outbox = outbox.clone();
        tokio::spawn(async move {
            while generations.changed().await.is_ok() {
                let generation = *generations.borrow_and_update();
                let refresh = Envelope::unsolicited(Response::Refresh { generation });
                if outbox.send(refresh).await.is_err() {
                    break;
                }
            }
        })
    };

    let mut runs = JoinSet::new();
    let mut lines = input.lines();
    loop {
        while runs.try_join_next().is_some() {}

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                tracing::info!("input closed, shutting down");
                break;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read request, shutting down");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let request: Envelope<Request> = match serde_json::from_str(&line) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "malformed request");
                let error = Response::Error { message: format!("malformed request: {}", e) };
                let _ = outbox.send(Envelope::unsolicited(error)).await;
                continue;
            }
        };

        let id = request.id;
        let response = match request.body {
            Request::Lenses { path, language, text } => {
                lenses(&app, &config::absolute(&path, &cwd), language, text)
            }
            Request::Run { command, path, line } => {
                let runner = Arc::clone(&app.runner);
                let outbox = outbox.clone();
                let document = config::absolute(&path, &cwd).into();
                let args = RunArgs { command, document, line };
                runs.spawn(async move {
                    let report = runner.run_directive(&args).await;
                    let _ = outbox.send(Envelope::reply(id, Response::Report { report })).await;
                });
                continue;
            }
            Request::SessionClosed { session } => {
                app.runner.sessions().notify_closed(&session).await;
                Response::Ok
            }
            Request::SetEnabled { enabled } => {
                app.settings.update(|settings| settings.enable_code_lens = enabled);
                Response::Ok
            }
            Request::Shutdown => {
                let _ = outbox.send(Envelope::reply(id, Response::Ok)).await;
                tracing::info!("shutdown requested");
                break;
            }
        };
        let _ = outbox.send(Envelope::reply(id, response)).await;
    }

    while runs.join_next().await.is_some() {}
    app.shutdown().await;

    settings_task.abort();
    refresh_task.abort();
    let _ = settings_task.await;
    let _ = refresh_task.await;
    drop(outbox);
    writer.await??;
    Ok(())
}

fn lenses(app: &App, path: &Path, language: Option<Language>, text: Option<String>) -> Response {
    let document = match text {
        Some(text) => {
            let language = language.unwrap_or_else(|| Language::from_path(path));
            SourceDocument::new(path, language, &text)
        }
        None => match SourceDocument::load(path) {
            Ok(document) => match language {
                Some(language) => document.with_language(language),
                None => document,
            },
            Err(e) => return Response::Error { message: e.to_string() },
        },
    };
    Response::Lenses {
        generation: app.projector.generation(),
        handles: app.projector.handles(&document),
    }
}

async fn write_responses<W>(
    mut inbox: mpsc::Receiver<Envelope<Response>>,
    mut output: W,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(message) = inbox.recv().await {
        let mut line = serde_json::to_string(&message)?;
        line.push('\n');
        output.write_all(line.as_bytes()).await?;
        output.flush().await?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "serve_tests.rs"]
mod tests;

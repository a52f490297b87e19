// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use rg_core::SourceDocument;

use crate::app::App;
use crate::output::{print_handles, OutputFormat};

pub fn handle(app: &App, file: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let document = SourceDocument::load(file)?;
    let handles = app.projector.handles(&document);
    tracing::debug!(file = %file.display(), count = handles.len(), "projected handles");
    print_handles(&handles, format)
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directive projector.
//!
//! Maps a document's directives to action handles. Nothing is cached: every
//! call rescans. When the code-lens setting flips, the projector bumps its
//! generation so the host knows to ask again.

use std::sync::{Arc, Weak};

use rg_core::directive::directive_at;
use rg_core::TextDocument;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::action::ActionHandle;
use crate::settings::SettingsStore;

/// Project `document` into action handles.
///
/// A line that cannot be read ends the projection early; the handles found
/// before it are returned and the failure is logged.
pub fn project<D>(document: &D, enabled: bool) -> Vec<ActionHandle>
where
    D: TextDocument + ?Sized,
{
    let mut handles = Vec::new();
    if !enabled || !document.language().bears_directives() {
        return handles;
    }

    for index in 0..document.line_count() {
        let text = match document.line_at(index) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    document = %document.id(),
                    line = index,
                    collected = handles.len(),
                    error = %e,
                    "directive scan degraded"
                );
                break;
            }
        };
        if let Some(directive) = directive_at(document.id(), index, text) {
            handles.push(ActionHandle::for_directive(directive, text));
        }
    }
    handles
}

pub struct Projector {
    settings: SettingsStore,
    generation: watch::Sender<u64>,
}

impl Projector {
    pub fn new(settings: SettingsStore) -> Self {
        let (generation, _) = watch::channel(0);
        Self { settings, generation }
    }

    /// Handles for `document` under the current settings.
    pub fn handles<D>(&self, document: &D) -> Vec<ActionHandle>
    where
        D: TextDocument + ?Sized,
    {
        project(document, self.settings.code_lens_enabled())
    }

    /// Ask the host to recompute every document's handles.
    pub fn refresh(&self) {
        self.generation.send_modify(|g| *g += 1);
        tracing::debug!(generation = *self.generation.borrow(), "code lens refresh requested");
    }

    pub fn generation(&self) -> u64 {
        *self.generation.borrow()
    }

    /// The recompute signal: changes whenever a refresh is requested.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.generation.subscribe()
    }

    /// Refresh whenever `enable_code_lens` changes.
    ///
    /// The task ends when the projector is dropped or the settings store
    /// goes away.
    pub fn watch_settings(self: &Arc<Self>) -> JoinHandle<()> {
        let mut rx = self.settings.subscribe();
        let mut enabled = rx.borrow_and_update().enable_code_lens;
        let projector: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let now = rx.borrow_and_update().enable_code_lens;
                if now == enabled {
                    continue;
                }
                enabled = now;
                match projector.upgrade() {
                    Some(projector) => projector.refresh(),
                    None => break,
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;

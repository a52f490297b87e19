// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live settings shared between the host and the engine.

use std::sync::Arc;

use rg_core::Settings;
use tokio::sync::watch;

/// Current settings plus a change feed.
#[derive(Clone)]
pub struct SettingsStore {
    tx: Arc<watch::Sender<Settings>>,
}

impl SettingsStore {
    pub fn new(settings: Settings) -> Self {
        let (tx, _) = watch::channel(settings);
        Self { tx: Arc::new(tx) }
    }

    /// Snapshot of the current settings.
    pub fn current(&self) -> Settings {
        self.tx.borrow().clone()
    }

    pub fn code_lens_enabled(&self) -> bool {
        self.tx.borrow().enable_code_lens
    }

    /// Apply `f`; subscribers are woken only if something changed.
    pub fn update(&self, f: impl FnOnce(&mut Settings)) -> bool {
        self.tx.send_if_modified(|settings| {
            let before = settings.clone();
            f(settings);
            *settings != before
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

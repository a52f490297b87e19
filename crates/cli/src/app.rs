// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine wiring shared by every command.

use std::sync::Arc;

use rg_adapters::ShellProcessAdapter;
use rg_core::{Settings, SystemClock};
use rg_engine::{Projector, Runner, RunnerDeps, SessionManager, SettingsStore};

use crate::adapters::{AlertSink, SessionSink};

pub type AppRunner = Runner<ShellProcessAdapter, SessionSink, AlertSink, SystemClock>;

/// The process-wide engine: one settings store, one projector, one runner
/// owning the session manager.
pub struct App {
    pub settings: SettingsStore,
    pub projector: Arc<Projector>,
    pub runner: Arc<AppRunner>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let deps = RunnerDeps {
            process: ShellProcessAdapter,
            sessions: Arc::new(SessionManager::new(SessionSink::from_settings(&settings))),
            notifier: AlertSink::from_settings(&settings),
        };
        let store = SettingsStore::new(settings);
        Self {
            projector: Arc::new(Projector::new(store.clone())),
            runner: Arc::new(Runner::new(deps, store.clone(), SystemClock)),
            settings: store,
        }
    }

    /// Close the live session, if any.
    pub async fn shutdown(&self) {
        self.runner.sessions().teardown().await;
    }
}

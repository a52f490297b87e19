// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rg-engine: turns directives into actions and runs them

pub mod action;
pub mod projector;
pub mod runner;
pub mod session;
pub mod settings;

pub use action::{ActionHandle, LineRange, RunArgs, RUN_ACTION, RUN_TITLE};
pub use projector::{project, Projector};
pub use runner::{Runner, RunnerDeps};
pub use session::{ExecutionSession, SessionManager, SESSION_NAME};
pub use settings::SettingsStore;

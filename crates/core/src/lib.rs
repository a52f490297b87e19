// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rg-core: directive discovery and run bookkeeping for rungen

pub mod clock;
pub mod directive;
pub mod document;
pub mod normalize;
pub mod report;
pub mod session;
pub mod settings;
pub mod workspace;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use directive::{scan, Directive, Scan, DIRECTIVE_MARKER};
pub use document::{DocumentError, DocumentId, Language, SourceDocument, TextDocument};
pub use normalize::normalize_command;
pub use report::{ExecutionReport, Outcome, GENERATE_TIMEOUT};
pub use session::SessionId;
pub use settings::{AlertKind, Settings, SettingsError};
pub use workspace::WorkspaceFolders;

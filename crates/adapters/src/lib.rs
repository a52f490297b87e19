// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for external I/O: child processes, session sinks, alerts

pub mod notify;
pub mod process;
pub mod session;
pub mod subprocess;

pub use notify::{ConsoleNotifyAdapter, DesktopNotifyAdapter, NotifyAdapter, NotifyError};
pub use process::{ProcessAdapter, ProcessError, ProcessOutput, ShellProcessAdapter};
pub use session::{
    ConsoleSessionAdapter, FileSessionAdapter, SessionAdapter, SessionError, SessionEvent,
};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
#[cfg(any(test, feature = "test-support"))]
pub use process::{FakeProcessAdapter, ProcessCall};
#[cfg(any(test, feature = "test-support"))]
pub use session::FakeSessionAdapter;

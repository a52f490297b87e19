// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling

use chrono::{DateTime, Utc};
use std::time::Instant;

/// A clock that provides the current time
pub trait Clock: Clone + Send + Sync + 'static {
    /// Monotonic time, used for measuring run durations
    fn now(&self) -> Instant;
    /// Wall-clock time, used for report timestamps
    fn utc_now(&self) -> DateTime<Utc>;
}

/// Real system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::Clock;
    use chrono::{DateTime, TimeZone, Utc};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    /// Fake clock for testing with controllable time
    #[derive(Clone)]
    pub struct FakeClock {
        current: Arc<Mutex<Instant>>,
        utc: Arc<Mutex<DateTime<Utc>>>,
    }

    impl FakeClock {
        pub fn new() -> Self {
            let utc = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap_or_default();
            Self { current: Arc::new(Mutex::new(Instant::now())), utc: Arc::new(Mutex::new(utc)) }
        }

        /// Advance both clocks by the given duration
        pub fn advance(&self, duration: Duration) {
            *self.current.lock() += duration;
            let delta = chrono::Duration::from_std(duration).unwrap_or_default();
            *self.utc.lock() += delta;
        }

        /// Set the wall-clock time
        pub fn set_utc(&self, at: DateTime<Utc>) {
            *self.utc.lock() = at;
        }
    }

    impl Default for FakeClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> Instant {
            *self.current.lock()
        }

        fn utc_now(&self) -> DateTime<Utc> {
            *self.utc.lock()
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeClock;

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;

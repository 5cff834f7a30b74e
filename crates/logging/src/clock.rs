//! crates/logging/src/clock.rs
//! Wall-clock source for timestamps.

use chrono::{DateTime, Local};

/// Source of the current time used when rendering timestamps.
pub trait Clock: Send + Sync {
    /// Returns the current local time.
    fn now(&self) -> DateTime<Local>;
}

/// Clock that reads the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Renders `time` with a strftime `pattern`.
///
/// A malformed pattern yields the RFC 3339 rendering instead of panicking
/// inside the formatter.
pub(crate) fn render_timestamp(time: &DateTime<Local>, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", time.format(pattern)).is_err() {
        return time.to_rfc3339();
    }
    out
}

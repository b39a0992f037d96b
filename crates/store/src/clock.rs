//! System clock - real wall-clock timestamps for progress records

use chrono::{SecondsFormat, Utc};

use brain_master_core::Clock;

/// Clock backed by the system time, in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    /// Current time as an ISO-8601 string, e.g. `2024-03-01T10:00:00Z`
    fn now(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

//! Session state and lifecycle.

pub mod engine;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reminder::Reminder;

/// One start-to-stop run: an ordered list of reminders plus the
/// timestamps bounding the active period.
///
/// Exactly one of three shapes holds at a time: never started (both
/// timestamps absent), active (`started` set, `stopped` absent), or idle
/// after a run (both set). `started` is replaced, never retroactively
/// edited, on each new start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub reminders: Vec<Reminder>,
    pub started: Option<DateTime<Utc>>,
    pub stopped: Option<DateTime<Utc>>,
}

impl Session {
    /// An empty session that has never been started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Started and not yet stopped.
    pub fn is_active(&self) -> bool {
        self.started.is_some() && self.stopped.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_session_is_idle() {
        let s = Session::new();
        assert!(!s.is_active());
        assert!(s.reminders.is_empty());
    }

    #[test]
    fn active_requires_started_without_stopped() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut s = Session::new();
        s.started = Some(t);
        assert!(s.is_active());
        s.stopped = Some(t + chrono::Duration::hours(1));
        assert!(!s.is_active());
    }
}

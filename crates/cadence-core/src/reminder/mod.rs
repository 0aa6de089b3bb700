//! Reminder and checklist types.

mod config;

pub use config::ReminderConfig;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A named boolean checklist item within a reminder.
///
/// Identity is by name within its parent checklist; names need not be
/// unique across reminders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub name: String,
    pub complete: bool,
}

impl Todo {
    /// Create an incomplete todo.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            complete: false,
        }
    }
}

/// A named, interval-driven unit containing a checklist, an optional
/// nested child reminder, a due timestamp, and a completion counter.
///
/// The `child` field holds the same shape, so nesting is structurally
/// unbounded; the front-end only ever exercises one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub name: String,
    /// Recurrence period in minutes.
    pub interval_min: u32,
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub child: Option<Box<Reminder>>,
    /// Absent while no session is active. Assigned on session start and
    /// re-anchored on every cycle rollover.
    #[serde(default)]
    pub next_due: Option<DateTime<Utc>>,
    /// Completed checklist cycles. Never decrements.
    #[serde(default)]
    pub completed: u32,
}

impl Reminder {
    /// Recurrence period as a duration.
    pub fn interval(&self) -> Duration {
        Duration::minutes(i64::from(self.interval_min))
    }

    /// Whether every todo in the checklist is complete.
    pub fn all_complete(&self) -> bool {
        self.todos.iter().all(|t| t.complete)
    }

    /// Project this reminder back to its value-level configuration,
    /// dropping runtime scheduling state.
    pub fn config(&self) -> ReminderConfig {
        ReminderConfig {
            name: self.name.clone(),
            interval_min: self.interval_min,
            todos: self.todos.iter().map(|t| t.name.clone()).collect(),
            child: self.child.as_ref().map(|c| Box::new(c.config())),
        }
    }

    /// Validity of this reminder's configuration, child included.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.config().validate()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

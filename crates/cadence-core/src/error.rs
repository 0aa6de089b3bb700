//! Error types for cadence-core.
//!
//! The model favors total functions: operations on missing todo names or
//! unchanged configurations are no-ops, not errors. The only rejectable
//! condition is starting a session that fails the validity gate.

use thiserror::Error;

/// Why a reminder configuration fails the validity rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Reminder name is empty or whitespace
    #[error("Reminder name must not be empty")]
    EmptyName,

    /// Interval is zero
    #[error("Interval must be at least one minute")]
    ZeroInterval,

    /// Checklist has no todos
    #[error("Checklist must contain at least one todo")]
    EmptyChecklist,

    /// A todo name is empty or whitespace
    #[error("Todo names must not be empty")]
    EmptyTodoName,

    /// Two todos in the same checklist share a name
    #[error("Duplicate todo name: '{0}'")]
    DuplicateTodoName(String),

    /// The nested child configuration is itself invalid
    #[error("Invalid child reminder: {0}")]
    Child(#[source] Box<ValidationError>),
}

/// Why a session could not be started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    /// Starting an empty session is meaningless
    #[error("Session has no reminders")]
    NoReminders,

    /// A reminder fails the validity rule
    #[error("Reminder {index} ('{name}') is invalid: {source}")]
    InvalidReminder {
        index: usize,
        name: String,
        #[source]
        source: ValidationError,
    },
}

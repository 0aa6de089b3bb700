//! Value-level reminder configuration and its validity rule.
//!
//! A `ReminderConfig` is what a front-end edits and submits: everything
//! about a reminder except its runtime scheduling state. Validity never
//! blocks an edit; it only gates session start.

use serde::{Deserialize, Serialize};

use super::{Reminder, Todo};
use crate::error::ValidationError;

/// Configuration for one reminder: name, interval, checklist item names
/// in display order, and an optional nested child configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
    pub name: String,
    /// Recurrence period in minutes.
    pub interval_min: u32,
    pub todos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<Box<ReminderConfig>>,
}

impl ReminderConfig {
    /// Build a reminder from this configuration: fresh incomplete todos,
    /// no due time, zero completed cycles. Child configurations build the
    /// same way, recursively.
    pub fn build(&self) -> Reminder {
        Reminder {
            name: self.name.clone(),
            interval_min: self.interval_min,
            todos: self.todos.iter().map(|name| Todo::new(name.as_str())).collect(),
            child: self.child.as_ref().map(|c| Box::new(c.build())),
            next_due: None,
            completed: 0,
        }
    }

    /// Check this configuration against the validity rule: non-empty name,
    /// positive interval, and a checklist of at least one uniquely named,
    /// non-empty todo. A child configuration must independently pass the
    /// same rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.interval_min == 0 {
            return Err(ValidationError::ZeroInterval);
        }
        if self.todos.is_empty() {
            return Err(ValidationError::EmptyChecklist);
        }
        for (i, name) in self.todos.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ValidationError::EmptyTodoName);
            }
            if self.todos[..i].contains(name) {
                return Err(ValidationError::DuplicateTodoName(name.clone()));
            }
        }
        if let Some(child) = &self.child {
            child
                .validate()
                .map_err(|e| ValidationError::Child(Box::new(e)))?;
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ReminderConfig {
        ReminderConfig {
            name: "Stretch".into(),
            interval_min: 30,
            todos: vec!["Stand up".into(), "Touch toes".into()],
            child: None,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert_eq!(config().validate(), Ok(()));
    }

    #[test]
    fn empty_name_fails() {
        let mut c = config();
        c.name = "  ".into();
        assert_eq!(c.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn zero_interval_fails() {
        let mut c = config();
        c.interval_min = 0;
        assert_eq!(c.validate(), Err(ValidationError::ZeroInterval));
    }

    #[test]
    fn empty_checklist_fails() {
        let mut c = config();
        c.todos.clear();
        assert_eq!(c.validate(), Err(ValidationError::EmptyChecklist));
    }

    #[test]
    fn duplicate_todo_name_fails() {
        let mut c = config();
        c.todos.push("Stand up".into());
        assert_eq!(
            c.validate(),
            Err(ValidationError::DuplicateTodoName("Stand up".into()))
        );
    }

    #[test]
    fn invalid_child_fails() {
        let mut c = config();
        c.child = Some(Box::new(ReminderConfig {
            name: "Child".into(),
            interval_min: 0,
            todos: vec!["Sip water".into()],
            child: None,
        }));
        assert_eq!(
            c.validate(),
            Err(ValidationError::Child(Box::new(ValidationError::ZeroInterval)))
        );
    }

    #[test]
    fn build_produces_fresh_runtime_state() {
        let r = config().build();
        assert_eq!(r.next_due, None);
        assert_eq!(r.completed, 0);
        assert!(r.todos.iter().all(|t| !t.complete));
        assert_eq!(
            r.todos.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            vec!["Stand up", "Touch toes"]
        );
    }
}

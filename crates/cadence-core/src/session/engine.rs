//! Scheduling engine: pure transition functions over session snapshots.
//!
//! Every operation takes the current snapshot by reference and returns a
//! replacement snapshot; nothing mutates in place. The caller owns the
//! single current snapshot and swaps it wholesale after each transition.
//! There is no internal clock -- "now" is always an explicit argument, so
//! every transition is deterministic and testable.
//!
//! Operations are total wherever the front-end could hold a stale
//! reference: an unmatched todo name or reminder index is a no-op, not an
//! error. The one rejectable condition is starting a session that fails
//! the validity gate.

use chrono::{DateTime, Utc};

use crate::error::StartError;
use crate::reminder::{Reminder, ReminderConfig};
use crate::session::Session;

/// Begin an active run.
///
/// Fails when the session has no reminders or any reminder configuration
/// is invalid. On success every reminder, nested children included, is
/// scheduled from its own interval: `next_due = now + interval`.
pub fn start_session(session: &Session, now: DateTime<Utc>) -> Result<Session, StartError> {
    if session.reminders.is_empty() {
        return Err(StartError::NoReminders);
    }
    for (index, reminder) in session.reminders.iter().enumerate() {
        reminder
            .validate()
            .map_err(|source| StartError::InvalidReminder {
                index,
                name: reminder.name.clone(),
                source,
            })?;
    }
    let reminders = session.reminders.iter().map(|r| schedule(r, now)).collect();
    tracing::info!("Session started with {} reminders", session.reminders.len());
    Ok(Session {
        reminders,
        started: Some(now),
        stopped: None,
    })
}

/// End the active run.
///
/// Due times are left as computed; they are only meaningful while the
/// session is active and the front-end is expected not to display them
/// while idle.
pub fn stop_session(session: &Session, now: DateTime<Utc>) -> Session {
    tracing::info!("Session stopped");
    Session {
        stopped: Some(now),
        ..session.clone()
    }
}

/// Append a reminder to the ordered list.
///
/// Runtime scheduling state is normalized so the new entry always arrives
/// unscheduled with a zero cycle counter. Insertion order is preserved
/// thereafter. Always succeeds; validity is a separate, non-blocking
/// concern.
pub fn add_reminder(session: &Session, reminder: Reminder) -> Session {
    let mut next = session.clone();
    next.reminders.push(unscheduled(reminder));
    next
}

/// Replace the configuration of the reminder at `index`.
///
/// A value-unchanged configuration keeps the existing reminder, its due
/// time and cycle counter intact; anything else rebuilds the reminder
/// wholesale from the configuration, checklist and child included.
///
/// # Panics
///
/// Panics if `index` is out of range. Reconfiguring a reminder that does
/// not exist is a programming error in the caller, not a recoverable
/// state.
pub fn update_reminder_config(session: &Session, index: usize, config: &ReminderConfig) -> Session {
    let mut next = session.clone();
    if next.reminders[index].config() != *config {
        next.reminders[index] = config.build();
    }
    next
}

/// Mark the named todo in the reminder's own checklist complete.
///
/// Completing the last open item rolls the cycle over: the counter
/// increments once, the checklist resets, and the due time re-anchors to
/// `now + interval`. Completing an already-complete todo is idempotent.
pub fn complete_todo(
    session: &Session,
    reminder_index: usize,
    todo_name: &str,
    now: DateTime<Utc>,
) -> Session {
    with_reminder(session, reminder_index, |r| complete_in(r, todo_name, now))
}

/// Mark the named todo in the reminder's own checklist incomplete.
///
/// Never triggers a rollover; a fully complete checklist does not persist
/// past the completion that produced it.
pub fn uncomplete_todo(session: &Session, reminder_index: usize, todo_name: &str) -> Session {
    with_reminder(session, reminder_index, |r| uncomplete_in(r, todo_name))
}

/// Mark the named todo in the child reminder's checklist complete.
///
/// Rollover applies to the child's own counter and due time, independent
/// of the parent. A reminder without a child is a no-op.
pub fn complete_child_todo(
    session: &Session,
    reminder_index: usize,
    todo_name: &str,
    now: DateTime<Utc>,
) -> Session {
    with_reminder(session, reminder_index, |r| {
        with_child(r, |c| complete_in(c, todo_name, now))
    })
}

/// Mark the named todo in the child reminder's checklist incomplete.
pub fn uncomplete_child_todo(session: &Session, reminder_index: usize, todo_name: &str) -> Session {
    with_reminder(session, reminder_index, |r| {
        with_child(r, |c| uncomplete_in(c, todo_name))
    })
}

// ── Internal ─────────────────────────────────────────────────────────

/// Assign `next_due` to a reminder and any nested children, each from its
/// own interval.
fn schedule(reminder: &Reminder, now: DateTime<Utc>) -> Reminder {
    let mut next = reminder.clone();
    next.next_due = Some(now + reminder.interval());
    next.child = reminder.child.as_deref().map(|c| Box::new(schedule(c, now)));
    next
}

/// Clear runtime scheduling state, recursively.
fn unscheduled(mut reminder: Reminder) -> Reminder {
    reminder.next_due = None;
    reminder.completed = 0;
    reminder.child = reminder.child.take().map(|c| Box::new(unscheduled(*c)));
    reminder
}

/// Replace the reminder at `index` with the result of `f`. A missing
/// index mirrors the missing-todo rule: stale references are a no-op.
fn with_reminder(
    session: &Session,
    index: usize,
    f: impl FnOnce(&Reminder) -> Reminder,
) -> Session {
    let mut next = session.clone();
    if let Some(reminder) = session.reminders.get(index) {
        next.reminders[index] = f(reminder);
    }
    next
}

/// Replace the child with the result of `f`, leaving the parent's own
/// checklist and schedule untouched. No child, no effect.
fn with_child(reminder: &Reminder, f: impl FnOnce(&Reminder) -> Reminder) -> Reminder {
    let mut next = reminder.clone();
    if let Some(child) = &reminder.child {
        next.child = Some(Box::new(f(child)));
    }
    next
}

/// Set the named todo's completion flag. Returns `None` when no todo
/// matches, which callers treat as a no-op.
fn set_todo(reminder: &Reminder, name: &str, complete: bool) -> Option<Reminder> {
    if !reminder.todos.iter().any(|t| t.name == name) {
        return None;
    }
    let mut next = reminder.clone();
    for todo in &mut next.todos {
        if todo.name == name {
            todo.complete = complete;
        }
    }
    Some(next)
}

fn complete_in(reminder: &Reminder, name: &str, now: DateTime<Utc>) -> Reminder {
    match set_todo(reminder, name, true) {
        Some(next) if next.all_complete() => roll_cycle(next, now),
        Some(next) => next,
        None => reminder.clone(),
    }
}

fn uncomplete_in(reminder: &Reminder, name: &str) -> Reminder {
    set_todo(reminder, name, false).unwrap_or_else(|| reminder.clone())
}

/// Cycle rollover: increment the counter, reset the checklist, and
/// re-anchor the due time to completion time rather than the old due time.
/// Drift is not compensated, so a late cycle never causes catch-up
/// ticking.
fn roll_cycle(mut reminder: Reminder, now: DateTime<Utc>) -> Reminder {
    reminder.completed += 1;
    for todo in &mut reminder.todos {
        todo.complete = false;
    }
    reminder.next_due = Some(now + reminder.interval());
    tracing::debug!(
        "Reminder '{}' completed cycle {}",
        reminder.name,
        reminder.completed
    );
    reminder
}

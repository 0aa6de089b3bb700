//! Integration tests walking the session lifecycle end to end: start
//! scheduling, checklist cycling, independent child scheduling,
//! reconfiguration, and the validity gate.

use cadence_core::{
    add_reminder, complete_child_todo, complete_todo, start_session, stop_session,
    uncomplete_todo, update_reminder_config, ReminderConfig, Session, StartError,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

fn config(name: &str, interval_min: u32, todos: &[&str]) -> ReminderConfig {
    ReminderConfig {
        name: name.into(),
        interval_min,
        todos: todos.iter().map(|t| t.to_string()).collect(),
        child: None,
    }
}

#[test]
fn full_session_run() {
    // Configure: a 30-minute posture reminder with a nested 10-minute
    // hydration child, plus a second stand-alone reminder.
    let mut posture = config("Posture", 30, &["Look away from screen", "Desk yoga"]);
    posture.child = Some(Box::new(config("Hydrate", 10, &["Drink water"])));

    let session = add_reminder(&Session::new(), posture.build());
    let session = add_reminder(&session, config("Eyes", 20, &["Blink break"]).build());

    // Nothing is scheduled before the run begins.
    assert!(session
        .reminders
        .iter()
        .all(|r| r.next_due.is_none() && r.completed == 0));

    // Start: every reminder, child included, scheduled from its own interval.
    let session = start_session(&session, t0()).unwrap();
    assert!(session.is_active());
    assert_eq!(
        session.reminders[0].next_due,
        Some(t0() + Duration::minutes(30))
    );
    assert_eq!(
        session.reminders[0].child.as_deref().unwrap().next_due,
        Some(t0() + Duration::minutes(10))
    );
    assert_eq!(
        session.reminders[1].next_due,
        Some(t0() + Duration::minutes(20))
    );

    // Work through the child's checklist first; the parent is untouched.
    let child_done = t0() + Duration::minutes(9);
    let session = complete_child_todo(&session, 0, "Drink water", child_done);
    let parent = &session.reminders[0];
    assert_eq!(parent.completed, 0);
    assert_eq!(parent.next_due, Some(t0() + Duration::minutes(30)));
    let child = parent.child.as_deref().unwrap();
    assert_eq!(child.completed, 1);
    assert_eq!(child.next_due, Some(child_done + Duration::minutes(10)));

    // Tick off the parent checklist; undo one item along the way.
    let session = complete_todo(&session, 0, "Look away from screen", t0());
    let session = uncomplete_todo(&session, 0, "Look away from screen");
    let session = complete_todo(&session, 0, "Look away from screen", t0());
    assert_eq!(session.reminders[0].completed, 0);

    let parent_done = t0() + Duration::minutes(28);
    let session = complete_todo(&session, 0, "Desk yoga", parent_done);
    let parent = &session.reminders[0];
    assert_eq!(parent.completed, 1);
    assert!(parent.todos.iter().all(|t| !t.complete));
    assert_eq!(parent.next_due, Some(parent_done + Duration::minutes(30)));
    // The child keeps its own schedule through the parent's rollover.
    assert_eq!(
        parent.child.as_deref().unwrap().next_due,
        Some(child_done + Duration::minutes(10))
    );

    // Stop: timestamps bound the run, due times are left as computed.
    let stopped_at = t0() + Duration::minutes(45);
    let session = stop_session(&session, stopped_at);
    assert!(!session.is_active());
    assert_eq!(session.started, Some(t0()));
    assert_eq!(session.stopped, Some(stopped_at));
    assert_eq!(
        session.reminders[0].next_due,
        Some(parent_done + Duration::minutes(30))
    );
}

#[test]
fn second_cycle_requires_a_full_fresh_checklist() {
    let session = add_reminder(&Session::new(), config("R", 15, &["A", "B", "C"]).build());
    let session = start_session(&session, t0()).unwrap();

    let mut session = session;
    for name in ["A", "B", "C"] {
        session = complete_todo(&session, 0, name, t0());
    }
    assert_eq!(session.reminders[0].completed, 1);

    // After the reset, completing C alone is an ordinary completion.
    let session = complete_todo(&session, 0, "C", t0());
    assert_eq!(session.reminders[0].completed, 1);
    assert!(session.reminders[0].todos[2].complete);

    // Only the simultaneous completion of A, B and C counts again.
    let session = complete_todo(&session, 0, "A", t0());
    let session = complete_todo(&session, 0, "B", t0());
    assert_eq!(session.reminders[0].completed, 2);
}

#[test]
fn validity_gates_the_start_action() {
    let session = add_reminder(&Session::new(), config("Broken", 0, &["A"]).build());
    assert!(!session.reminders[0].is_valid());

    let err = start_session(&session, t0()).unwrap_err();
    match err {
        StartError::InvalidReminder { index, name, .. } => {
            assert_eq!(index, 0);
            assert_eq!(name, "Broken");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_session_cannot_start() {
    assert_eq!(
        start_session(&Session::new(), t0()),
        Err(StartError::NoReminders)
    );
}

#[test]
fn reconfiguration_preserves_ordering() {
    let session = add_reminder(&Session::new(), config("R1", 10, &["A"]).build());
    let session = add_reminder(&session, config("R2", 20, &["B"]).build());
    let session = add_reminder(&session, config("R3", 30, &["C"]).build());

    let replacement = config("R2 revised", 25, &["B1", "B2"]);
    let updated = update_reminder_config(&session, 1, &replacement);

    let names: Vec<&str> = updated.reminders.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["R1", "R2 revised", "R3"]);
    // Neighbors are untouched, by value.
    assert_eq!(updated.reminders[0], session.reminders[0]);
    assert_eq!(updated.reminders[2], session.reminders[2]);
}

#[test]
fn reconfiguration_noop_keeps_cycle_progress() {
    let session = add_reminder(&Session::new(), config("R", 15, &["A"]).build());
    let session = start_session(&session, t0()).unwrap();
    let session = complete_todo(&session, 0, "A", t0() + Duration::minutes(1));
    assert_eq!(session.reminders[0].completed, 1);

    let same = session.reminders[0].config();
    let updated = update_reminder_config(&session, 0, &same);
    assert_eq!(updated, session);

    let mut changed = same;
    changed.todos.push("B".into());
    let updated = update_reminder_config(&session, 0, &changed);
    assert_eq!(updated.reminders[0].completed, 0);
    assert_eq!(updated.reminders[0].next_due, None);
}

//! # Cadence Core Library
//!
//! This library provides the core business logic for Cadence, a recurring
//! reminder tracker. A user configures reminders, each carrying a checklist
//! of todos and optionally one nested child reminder with its own interval
//! and checklist; a session tracks one active-or-idle run over those
//! reminders. The CLI binary is a thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Model**: plain value types ([`Session`], [`Reminder`], [`Todo`]) with
//!   no interior mutability and no ambient clock reads
//! - **Scheduling Engine**: pure transition functions in [`session::engine`]
//!   that map an old snapshot plus an event to a new snapshot; the caller
//!   owns the single current snapshot and replaces it wholesale
//! - **Validity**: a per-configuration rule ([`ReminderConfig::validate`])
//!   that gates session start but never blocks in-progress edits
//!
//! Waiting for a reminder to become due is delegated entirely to the
//! caller; this crate only does the due-time arithmetic.
//!
//! ## Key Components
//!
//! - [`Session`]: ordered reminders plus start/stop timestamps
//! - [`Reminder`]: interval-driven unit with a checklist and optional child
//! - [`ReminderConfig`]: the value-level configuration a front-end edits
//! - [`session::engine`]: the transition functions

pub mod error;
pub mod reminder;
pub mod session;

pub use error::{StartError, ValidationError};
pub use reminder::{Reminder, ReminderConfig, Todo};
pub use session::engine::{
    add_reminder, complete_child_todo, complete_todo, start_session, stop_session,
    uncomplete_child_todo, uncomplete_todo, update_reminder_config,
};
pub use session::Session;

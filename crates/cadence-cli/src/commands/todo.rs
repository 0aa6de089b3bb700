use chrono::Utc;
use clap::Subcommand;

use cadence_core::{complete_child_todo, complete_todo, uncomplete_child_todo, uncomplete_todo};

use crate::state;

#[derive(Subcommand)]
pub enum TodoAction {
    /// Mark a todo complete
    Done { reminder: usize, name: String },
    /// Mark a todo incomplete
    Undone { reminder: usize, name: String },
    /// Mark a child-checklist todo complete
    ChildDone { reminder: usize, name: String },
    /// Mark a child-checklist todo incomplete
    ChildUndone { reminder: usize, name: String },
}

pub fn run(action: TodoAction) -> Result<(), Box<dyn std::error::Error>> {
    let session = state::load();
    let next = match action {
        TodoAction::Done { reminder, name } => complete_todo(&session, reminder, &name, Utc::now()),
        TodoAction::Undone { reminder, name } => uncomplete_todo(&session, reminder, &name),
        TodoAction::ChildDone { reminder, name } => {
            complete_child_todo(&session, reminder, &name, Utc::now())
        }
        TodoAction::ChildUndone { reminder, name } => {
            uncomplete_child_todo(&session, reminder, &name)
        }
    };
    println!("{}", serde_json::to_string_pretty(&next)?);
    state::save(&next)?;
    Ok(())
}

use clap::{Args, Subcommand};

use cadence_core::{add_reminder, update_reminder_config, ReminderConfig};

use crate::state;

/// Starter reminder matching the front-end's "Add Reminder" defaults.
pub fn starter_config() -> ReminderConfig {
    ReminderConfig {
        name: "New reminder".into(),
        interval_min: 30,
        todos: vec![
            "Look away from screen".into(),
            "Drink water".into(),
            "Desk yoga".into(),
        ],
        child: None,
    }
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Reminder name
    #[arg(long)]
    name: Option<String>,
    /// Recurrence interval in minutes
    #[arg(long)]
    interval: Option<u32>,
    /// Checklist item, repeatable in display order; replaces the
    /// checklist when given
    #[arg(long = "todo")]
    todos: Vec<String>,
    /// Nested child reminder name
    #[arg(long)]
    child_name: Option<String>,
    /// Child recurrence interval in minutes
    #[arg(long)]
    child_interval: Option<u32>,
    /// Child checklist item, repeatable; replaces the child checklist
    /// when given
    #[arg(long = "child-todo")]
    child_todos: Vec<String>,
    /// Remove the nested child reminder
    #[arg(long, conflicts_with_all = ["child_name", "child_interval", "child_todos"])]
    no_child: bool,
}

impl ConfigArgs {
    fn touches_child(&self) -> bool {
        self.child_name.is_some() || self.child_interval.is_some() || !self.child_todos.is_empty()
    }

    /// Merge these arguments over a base configuration. Unset flags keep
    /// the base values, so `set` edits in place and `add` falls back to
    /// the starter defaults.
    fn merged(self, base: ReminderConfig) -> ReminderConfig {
        let child = if self.no_child {
            None
        } else if self.touches_child() {
            let child_base = base.child.map(|c| *c).unwrap_or(ReminderConfig {
                name: "New reminder".into(),
                interval_min: 30,
                todos: Vec::new(),
                child: None,
            });
            Some(Box::new(ReminderConfig {
                name: self.child_name.unwrap_or(child_base.name),
                interval_min: self.child_interval.unwrap_or(child_base.interval_min),
                todos: if self.child_todos.is_empty() {
                    child_base.todos
                } else {
                    self.child_todos
                },
                child: child_base.child,
            }))
        } else {
            base.child
        };
        ReminderConfig {
            name: self.name.unwrap_or(base.name),
            interval_min: self.interval.unwrap_or(base.interval_min),
            todos: if self.todos.is_empty() {
                base.todos
            } else {
                self.todos
            },
            child,
        }
    }
}

#[derive(Subcommand)]
pub enum ReminderAction {
    /// Append a reminder; defaults mirror the starter reminder
    Add {
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Replace the configuration of the reminder at INDEX
    Set {
        index: usize,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// List reminders with their validity
    List {
        /// Print as JSON instead of one line per reminder
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ReminderAction) -> Result<(), Box<dyn std::error::Error>> {
    let session = state::load();
    match action {
        ReminderAction::Add { config } => {
            let config = config.merged(starter_config());
            let next = add_reminder(&session, config.build());
            let index = next.reminders.len() - 1;
            println!("Added reminder {index}: '{}'", config.name);
            if let Err(e) = config.validate() {
                eprintln!("note: reminder is not yet valid: {e}");
            }
            state::save(&next)?;
        }
        ReminderAction::Set { index, config } => {
            let base = session
                .reminders
                .get(index)
                .ok_or_else(|| format!("No reminder at index {index}"))?
                .config();
            let config = config.merged(base);
            let next = update_reminder_config(&session, index, &config);
            println!("Updated reminder {index}: '{}'", config.name);
            if let Err(e) = config.validate() {
                eprintln!("note: reminder is not yet valid: {e}");
            }
            state::save(&next)?;
        }
        ReminderAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&session.reminders)?);
            } else {
                for (i, r) in session.reminders.iter().enumerate() {
                    let validity = if r.is_valid() { "" } else { " (invalid)" };
                    let child = match &r.child {
                        Some(c) => format!(", child '{}' every {}m", c.name, c.interval_min),
                        None => String::new(),
                    };
                    println!(
                        "{i}: '{}' every {}m, {} todos{child}{validity}",
                        r.name,
                        r.interval_min,
                        r.todos.len()
                    );
                }
            }
        }
    }
    Ok(())
}

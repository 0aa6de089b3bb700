//! Reminder-set configuration files.
//!
//! A TOML file of `[[reminder]]` tables, each with an optional nested
//! `[reminder.child]` table, loaded wholesale into an idle session.

use std::path::PathBuf;

use clap::Subcommand;
use serde::{Deserialize, Serialize};

use cadence_core::{add_reminder, ReminderConfig, Session};

use super::reminder::starter_config;
use crate::state;

/// On-disk reminder set.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReminderFile {
    #[serde(default, rename = "reminder")]
    pub reminders: Vec<ReminderConfig>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write a starter configuration file
    Init {
        #[arg(default_value = "cadence.toml")]
        path: PathBuf,
    },
    /// Replace the session's reminders from a configuration file
    Load {
        #[arg(default_value = "cadence.toml")]
        path: PathBuf,
    },
    /// Print the current reminders as a configuration file
    Show,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Init { path } => {
            let file = ReminderFile {
                reminders: vec![starter_config()],
            };
            std::fs::write(&path, toml::to_string_pretty(&file)?)?;
            println!("Wrote {}", path.display());
        }
        ConfigAction::Load { path } => {
            if state::load().is_active() {
                return Err("Stop the active session before loading a configuration".into());
            }
            let file: ReminderFile = toml::from_str(&std::fs::read_to_string(&path)?)?;
            let mut next = Session::new();
            for config in &file.reminders {
                next = add_reminder(&next, config.build());
            }
            state::save(&next)?;
            println!(
                "Loaded {} reminders from {}",
                file.reminders.len(),
                path.display()
            );
        }
        ConfigAction::Show => {
            let session = state::load();
            let file = ReminderFile {
                reminders: session.reminders.iter().map(|r| r.config()).collect(),
            };
            print!("{}", toml::to_string_pretty(&file)?);
        }
    }
    Ok(())
}

use chrono::Utc;
use clap::Subcommand;

use cadence_core::{start_session, stop_session};

use crate::state;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start the session and schedule every reminder
    Start,
    /// Stop the active session
    Stop,
    /// Print the current session snapshot as JSON
    Status,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let session = state::load();
    match action {
        SessionAction::Start => {
            let next = start_session(&session, Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&next)?);
            state::save(&next)?;
        }
        SessionAction::Stop => {
            let next = stop_session(&session, Utc::now());
            println!("{}", serde_json::to_string_pretty(&next)?);
            state::save(&next)?;
        }
        SessionAction::Status => {
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
    }
    Ok(())
}

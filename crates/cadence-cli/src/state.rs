//! Presentation-layer snapshot store.
//!
//! The CLI owns the single current `Session` snapshot between
//! invocations, serialized as JSON. The core model has no persistence of
//! its own; this file plays the role a GUI's in-memory state variable
//! would, surviving only because CLI processes are short-lived.

use std::path::{Path, PathBuf};

use cadence_core::Session;

const STATE_ENV: &str = "CADENCE_STATE";

/// State file location: `$CADENCE_STATE` override, else the platform
/// data directory.
pub fn state_path() -> PathBuf {
    if let Ok(path) = std::env::var(STATE_ENV) {
        return PathBuf::from(path);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cadence")
        .join("session.json")
}

/// Load the current snapshot. A missing or unreadable state file yields
/// an empty session rather than an error.
pub fn load() -> Session {
    load_from(&state_path())
}

pub fn load_from(path: &Path) -> Session {
    match std::fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => Session::default(),
    }
}

/// Persist the snapshot, creating parent directories as needed.
pub fn save(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    save_to(&state_path(), session)
}

pub fn save_to(path: &Path, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(session)?)?;
    Ok(())
}

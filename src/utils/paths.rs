//! Cross-Platform Path Utilities
//!
//! Functions for resolving the application directory (~/.sprint-pilot/).

use std::path::PathBuf;

use crate::utils::error::{SyncError, SyncResult};

/// Get the user's home directory
pub fn home_dir() -> SyncResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| SyncError::config("Could not determine home directory"))
}

/// Get the Sprint Pilot directory (~/.sprint-pilot/)
pub fn sprint_pilot_dir() -> SyncResult<PathBuf> {
    Ok(home_dir()?.join(".sprint-pilot"))
}

/// Get the config file path (~/.sprint-pilot/config.json)
pub fn config_path() -> SyncResult<PathBuf> {
    Ok(sprint_pilot_dir()?.join("config.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> SyncResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the Sprint Pilot directory, creating if it doesn't exist
pub fn ensure_sprint_pilot_dir() -> SyncResult<PathBuf> {
    let path = sprint_pilot_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}

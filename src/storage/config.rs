//! JSON Configuration Management
//!
//! Handles reading and writing the pipeline configuration file.

use std::fs;
use std::path::PathBuf;

use crate::models::settings::{SettingsUpdate, SyncConfig};
use crate::utils::error::{SyncError, SyncResult};
use crate::utils::paths::{config_path, ensure_sprint_pilot_dir};

/// Configuration service for managing pipeline settings
#[derive(Debug)]
pub struct ConfigService {
    config_path: PathBuf,
    config: SyncConfig,
}

impl ConfigService {
    /// Create a new config service, loading existing config or creating defaults
    pub fn new() -> SyncResult<Self> {
        // Ensure the config directory exists
        ensure_sprint_pilot_dir()?;

        let config_path = config_path()?;
        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = SyncConfig::default();
            Self::save_to_file(&config_path, &default_config)?;
            default_config
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Create a config service backed by an explicit file path.
    pub fn with_path(config_path: PathBuf) -> SyncResult<Self> {
        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            SyncConfig::default()
        };
        Ok(Self {
            config_path,
            config,
        })
    }

    /// Load configuration from a file
    fn load_from_file(path: &PathBuf) -> SyncResult<SyncConfig> {
        let content = fs::read_to_string(path)?;
        let config: SyncConfig = serde_json::from_str(&content)?;
        config.validate().map_err(SyncError::validation)?;
        Ok(config)
    }

    /// Save configuration to a file with pretty formatting
    fn save_to_file(path: &PathBuf, config: &SyncConfig) -> SyncResult<()> {
        config.validate().map_err(SyncError::validation)?;
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &SyncConfig {
        &self.config
    }

    /// Update the configuration with a partial update
    pub fn update_config(&mut self, update: SettingsUpdate) -> SyncResult<SyncConfig> {
        self.config.apply_update(update);
        self.save()?;
        Ok(self.config.clone())
    }

    /// Save the current configuration to disk
    pub fn save(&self) -> SyncResult<()> {
        Self::save_to_file(&self.config_path, &self.config)
    }

    /// Reload configuration from disk
    pub fn reload(&mut self) -> SyncResult<()> {
        self.config = Self::load_from_file(&self.config_path)?;
        Ok(())
    }
}

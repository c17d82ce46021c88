//! Configuration for Roster
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default location of the persisted roster
pub const DEFAULT_ROSTER_PATH: &str = "resources/employees.txt";

/// Main configuration for a RosterStore
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// File the roster is loaded from and saved to
    pub roster_path: PathBuf,

    /// fsync the roster file after every save
    pub sync_on_save: bool,

    /// Create an empty roster file (and parent directories) when loading finds none
    pub create_if_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            sync_on_save: true,
            create_if_missing: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the roster file path
    pub fn roster_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.roster_path = path.into();
        self
    }

    /// Set whether saves are fsynced
    pub fn sync_on_save(mut self, sync: bool) -> Self {
        self.config.sync_on_save = sync;
        self
    }

    /// Set whether a missing roster file is created on load
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.config.create_if_missing = create;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

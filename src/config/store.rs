//! Thread-safe configuration storage.
//!
//! Holds the loaded config behind a lock together with the path it came
//! from, so the theme preference can be written back to the same file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::{save_theme, ConfigError};
use crate::config::theme::Theme;
use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Effective theme: the stored preference, else the detected one.
    pub fn theme(&self) -> Theme {
        Theme::resolve(self.inner.read().theme)
    }

    /// Record a new theme preference and persist it.
    ///
    /// The in-memory value is updated even when writing the file fails, so
    /// the running session keeps the user's choice.
    pub fn set_theme(&self, theme: Theme) -> Result<(), ConfigError> {
        self.inner.write().theme = Some(theme);
        save_theme(&self.path, theme)
    }

    /// Reload config from the file.
    ///
    /// On success, atomically replaces the current config.
    /// On failure, keeps the old config and returns the error.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config;
        Ok(())
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

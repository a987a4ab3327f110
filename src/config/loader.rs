use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::theme::Theme;
use crate::config::types::Config;

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {source}")]
    SerializeError {
        #[source]
        source: toml::ser::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/folio/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("folio").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Typewriter intervals and pause are non-zero
    /// - The UI tick rate is non-zero
    /// - An explicit phrase list is non-empty and has no blank phrase
    pub fn validate(&self) -> Result<(), ConfigError> {
        let typewriter = &self.typewriter;
        for (name, value) in [
            ("typewriter.type_ms", typewriter.type_ms),
            ("typewriter.delete_ms", typewriter.delete_ms),
            ("typewriter.pause_ms", typewriter.pause_ms),
            ("ui.tick_rate_ms", self.ui.tick_rate_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be greater than zero", name),
                });
            }
        }

        if let Some(phrases) = &typewriter.phrases {
            if phrases.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "typewriter.phrases must not be empty".to_string(),
                });
            }
            if let Some(index) = phrases.iter().position(|p| p.text.trim().is_empty()) {
                return Err(ConfigError::ValidationError {
                    message: format!("typewriter.phrases[{}] has no text", index),
                });
            }
        }

        Ok(())
    }
}

/// Persist `theme` into the config file at `path`.
///
/// Only the top-level `theme` key is rewritten; every other section is kept
/// as is. Creates the file (and its directory) when missing.
pub fn save_theme(path: &Path, theme: Theme) -> Result<(), ConfigError> {
    let mut table = if path.exists() {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str::<toml::Table>(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?
    } else {
        toml::Table::new()
    };

    table.insert(
        "theme".to_string(),
        toml::Value::String(theme.as_str().to_string()),
    );

    let serialized =
        toml::to_string_pretty(&table).map_err(|e| ConfigError::SerializeError { source: e })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    fs::write(path, serialized).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(theme = %theme, path = %path.display(), "theme preference saved");
    Ok(())
}

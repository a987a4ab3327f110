use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::theme::Theme;
use crate::typewriter::{Phrase, TypewriterTiming};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Stored color scheme. Absent means "follow the terminal".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Typewriter animation: timing in milliseconds and an optional phrase list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Delay between typed characters (default: 100).
    #[serde(default = "default_type_ms")]
    pub type_ms: u64,
    /// Delay between deleted characters (default: 50).
    #[serde(default = "default_delete_ms")]
    pub delete_ms: u64,
    /// Hold on a complete phrase before deleting (default: 2000).
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
    /// Replaces the content's focus phrases when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrases: Option<Vec<Phrase>>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll / redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output. The TUI owns stdout, so logs always go to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path (default: `<data dir>/folio/folio.log`).
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive used when `FOLIO_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_type_ms() -> u64 {
    100
}

fn default_delete_ms() -> u64 {
    50
}

fn default_pause_ms() -> u64 {
    2000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_ms: default_type_ms(),
            delete_ms: default_delete_ms(),
            pause_ms: default_pause_ms(),
            phrases: None,
        }
    }
}

impl TypewriterConfig {
    pub fn timing(&self) -> TypewriterTiming {
        TypewriterTiming {
            type_interval: Duration::from_millis(self.type_ms),
            delete_interval: Duration::from_millis(self.delete_ms),
            pause: Duration::from_millis(self.pause_ms),
        }
    }

    /// Configured phrases, else `fallback`.
    pub fn phrases_or(&self, fallback: &[Phrase]) -> Vec<Phrase> {
        self.phrases
            .clone()
            .unwrap_or_else(|| fallback.to_vec())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Configured log file, or the platform data directory.
    pub fn resolved_file(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("folio")
                .join("folio.log")
        })
    }
}

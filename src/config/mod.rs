mod loader;
mod store;
mod theme;
mod types;

pub use loader::{save_theme, ConfigError};
pub use store::ConfigStore;
pub use theme::{Theme, UnknownTheme};
pub use types::{Config, LoggingConfig, TypewriterConfig, UiConfig};

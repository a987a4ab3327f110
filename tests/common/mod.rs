//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use folio::config::{Config, ConfigStore, Theme};
use folio::content::Content;
use folio::typewriter::{Animator, Phrase, Render, RenderSink, TypewriterTiming, VirtualClock};
use folio::ui::app::App;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub type RenderLog = Arc<Mutex<Vec<Render>>>;

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

pub fn phrases(texts: &[&str]) -> Vec<Phrase> {
    texts.iter().map(|text| Phrase::new(*text)).collect()
}

/// Animator on a virtual clock with default timing, recording every render.
pub fn animate(texts: &[&str]) -> (VirtualClock, Animator, RenderLog) {
    let clock = VirtualClock::new();
    let log: RenderLog = Arc::new(Mutex::new(Vec::new()));
    let sink: RenderSink = {
        let log = Arc::clone(&log);
        Arc::new(move |render: &Render| log.lock().push(render.clone()))
    };
    let animator = Animator::create_with(
        phrases(texts),
        Arc::new(clock.clone()),
        TypewriterTiming::default(),
        Some(sink),
    )
    .expect("valid phrases");
    (clock, animator, log)
}

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// App over the built-in content with a config file in a temp dir.
pub fn test_app(theme: Theme) -> (TempDir, PathBuf, App) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    let config = Config {
        theme: Some(theme),
        ..Config::default()
    };
    let store = ConfigStore::new(config, config_path.clone());
    let mut app = App::new(store, Arc::new(Content::builtin()));
    app.on_resize(120, 40);
    (temp_dir, config_path, app)
}

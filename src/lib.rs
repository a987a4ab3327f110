pub mod chat;
pub mod config;
pub mod content;
pub mod logging;
pub mod shutdown;
pub mod typewriter;
pub mod ui;

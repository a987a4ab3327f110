pub mod app;
pub mod appearance;
pub mod chat;
pub mod events;
pub mod footer;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod mvi;
pub mod page;
pub mod render;
pub mod runtime;
pub mod sidebar;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;

use crate::chat::{ChatError, ChatMessage};
use crate::config::{ConfigStore, Theme};
use crate::content::Content;
use crate::typewriter::Render;
use crate::ui::appearance::{AppearanceIntent, AppearanceReducer, AppearanceState};
use crate::ui::chat::{ChatIntent, ChatPanelState, ChatReducer};
use crate::ui::layout::{inner, main_rect};
use crate::ui::mvi::Reducer;
use crate::ui::page::{build_page, measure, Page, PageMetrics, PageView, Section};
use chrono::Datelike;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Page,
    Chat,
}

#[derive(Debug)]
pub enum UiCommand {
    GenerateReply {
        message: String,
        history: Vec<ChatMessage>,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    config: ConfigStore,
    content: Arc<Content>,
    /// Light/dark mode (MVI pattern).
    appearance: AppearanceState,
    /// Chat panel (MVI pattern).
    chat: ChatPanelState,
    typewriter: Render,
    cursor_visible: bool,
    scroll: usize,
    section: Section,
    year: i32,
    command_sender: Option<UiCommandSender>,
    last_error: Option<String>,
}

impl App {
    pub fn new(config: ConfigStore, content: Arc<Content>) -> Self {
        let theme = config.theme();
        Self {
            should_quit: false,
            focus: Focus::Page,
            size: None,
            config,
            content,
            appearance: AppearanceState::new(theme),
            chat: ChatPanelState::with_greeting(now_ms()),
            typewriter: Render::default(),
            cursor_visible: true,
            scroll: 0,
            section: Section::About,
            year: chrono::Local::now().year(),
            command_sender: None,
            last_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn theme(&self) -> Theme {
        self.appearance.theme
    }

    pub fn appearance(&self) -> &AppearanceState {
        &self.appearance
    }

    pub fn chat(&self) -> &ChatPanelState {
        &self.chat
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn typewriter(&self) -> &Render {
        &self.typewriter
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn dispatch_appearance(&mut self, intent: AppearanceIntent) {
        dispatch_mvi!(self, appearance, AppearanceReducer, intent);
    }

    pub fn dispatch_chat(&mut self, intent: ChatIntent) {
        dispatch_mvi!(self, chat, ChatReducer, intent);
    }

    /// Lines of the main column for the current state.
    pub fn page(&self) -> Page {
        build_page(&PageView {
            content: &self.content,
            typewriter: &self.typewriter,
            theme: self.appearance.theme,
            cursor_visible: self.cursor_visible,
            year: self.year,
        })
    }

    pub fn on_tick(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    pub fn on_typewriter(&mut self, render: Render) {
        self.typewriter = render;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.scroll = self.scroll.min(self.max_scroll(&self.metrics()));
    }

    pub fn on_chat_reply(&mut self, reply: Result<String, ChatError>) {
        match reply {
            Ok(text) => self.dispatch_chat(ChatIntent::ReplyReceived {
                text,
                timestamp_ms: now_ms(),
            }),
            Err(err) => {
                tracing::warn!(error = %err, "chat reply failed");
                self.dispatch_chat(ChatIntent::ReplyFailed {
                    timestamp_ms: now_ms(),
                });
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.request_quit();
            return;
        }
        match self.focus {
            Focus::Page => self.on_page_key(key),
            Focus::Chat => self.on_chat_key(key),
        }
    }

    fn on_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('c') => self.open_chat(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(self.viewport_height() as isize).max(1)),
            KeyCode::PageDown => self.scroll_by((self.viewport_height() as isize).max(1)),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(usize::MAX),
            KeyCode::Tab => self.jump_to(self.section.next()),
            KeyCode::BackTab => self.jump_to(self.section.prev()),
            _ => {}
        }
    }

    fn on_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_chat(),
            KeyCode::Enter => self.submit_chat(),
            KeyCode::Backspace => self.dispatch_chat(ChatIntent::Backspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch_chat(ChatIntent::Input(ch))
            }
            _ => {}
        }
    }

    /// Flip light/dark and remember the choice in the config file.
    pub fn toggle_theme(&mut self) {
        self.dispatch_appearance(AppearanceIntent::Toggle);
        let theme = self.appearance.theme;
        tracing::debug!(theme = %theme, toggles = self.appearance.toggles, "theme toggled");
        match self.config.set_theme(theme) {
            Ok(()) => self.last_error = None,
            Err(err) => {
                tracing::warn!(error = %err, "failed to persist theme");
                self.last_error = Some(format!("theme not saved: {err}"));
            }
        }
    }

    pub fn open_chat(&mut self) {
        self.dispatch_chat(ChatIntent::Open);
        self.focus = Focus::Chat;
    }

    pub fn close_chat(&mut self) {
        self.dispatch_chat(ChatIntent::Close);
        self.focus = Focus::Page;
    }

    /// Send the typed message. Blank input or a pending reply is ignored.
    pub fn submit_chat(&mut self) {
        if !self.chat.can_submit() {
            return;
        }
        let message = self.chat.input.trim().to_string();
        let history = self.chat.messages.clone();
        self.dispatch_chat(ChatIntent::Submit {
            timestamp_ms: now_ms(),
        });

        let sent = match &self.command_sender {
            Some(sender) => sender
                .try_send(UiCommand::GenerateReply { message, history })
                .map_err(|err| err.to_string()),
            None => Err("chat worker not running".to_string()),
        };
        if let Err(err) = sent {
            tracing::warn!(error = %err, "failed to queue chat message");
            self.dispatch_chat(ChatIntent::ReplyFailed {
                timestamp_ms: now_ms(),
            });
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as usize)
        };
        self.scroll_to(target);
    }

    pub fn scroll_to(&mut self, line: usize) {
        let metrics = self.metrics();
        self.scroll = line.min(self.max_scroll(&metrics));
        self.section = metrics
            .anchors
            .iter()
            .rev()
            .find(|(_, offset)| *offset <= self.scroll)
            .map(|(section, _)| *section)
            .unwrap_or(Section::About);
    }

    /// Scroll so `section`'s heading is at the top, as far as the page allows.
    pub fn jump_to(&mut self, section: Section) {
        let metrics = self.metrics();
        self.scroll = metrics.offset_of(section).min(self.max_scroll(&metrics));
        self.section = section;
    }

    fn metrics(&self) -> PageMetrics {
        measure(&self.page(), self.main_inner().width)
    }

    fn max_scroll(&self, metrics: &PageMetrics) -> usize {
        metrics.total.saturating_sub(self.viewport_height())
    }

    fn viewport_height(&self) -> usize {
        self.main_inner().height as usize
    }

    fn main_inner(&self) -> Rect {
        match self.size {
            Some((cols, rows)) => inner(main_rect(Rect::new(0, 0, cols, rows))),
            None => Rect::default(),
        }
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{DISABLED_REPLY, FAILURE_REPLY, GREETING};
    use crate::config::Config;

    fn app_in(dir: &tempfile::TempDir) -> App {
        let config = Config {
            theme: Some(Theme::Light),
            ..Config::default()
        };
        let store = ConfigStore::new(config, dir.path().join("config.toml"));
        let mut app = App::new(store, Arc::new(Content::builtin()));
        app.on_resize(120, 30);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.on_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = app_in(&dir);
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn toggle_theme_persists_choice() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        assert_eq!(app.theme(), Theme::Light);

        app.on_key(key(KeyCode::Char('t')));
        assert_eq!(app.theme(), Theme::Dark);
        assert!(app.last_error().is_none());

        let saved = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(saved.theme, Some(Theme::Dark));
    }

    #[test]
    fn tick_blinks_cursor() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        assert!(app.cursor_visible());
        app.on_tick();
        assert!(!app.cursor_visible());
        app.on_tick();
        assert!(app.cursor_visible());
    }

    #[test]
    fn chat_keys_edit_input_and_escape_closes() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.on_key(key(KeyCode::Char('c')));
        assert_eq!(app.focus(), Focus::Chat);
        assert!(app.chat().open);

        for ch in "hiq".chars() {
            app.on_key(key(KeyCode::Char(ch)));
        }
        app.on_key(key(KeyCode::Backspace));
        assert_eq!(app.chat().input, "hi");
        assert!(!app.should_quit());

        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.focus(), Focus::Page);
        assert!(!app.chat().open);
        assert!(!app.should_quit());
    }

    #[test]
    fn submit_queues_command_with_history() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let (tx, mut rx) = mpsc::channel(4);
        app.set_command_sender(tx);

        app.open_chat();
        for ch in "  hello ".chars() {
            app.on_key(key(KeyCode::Char(ch)));
        }
        app.on_key(key(KeyCode::Enter));

        assert!(app.chat().loading);
        assert!(app.chat().input.is_empty());
        match rx.try_recv().unwrap() {
            UiCommand::GenerateReply { message, history } => {
                assert_eq!(message, "hello");
                assert_eq!(history.len(), 1);
                assert_eq!(history[0].text, GREETING);
            }
        }

        // Second Enter while loading does nothing.
        app.on_key(key(KeyCode::Char('x')));
        app.on_key(key(KeyCode::Enter));
        assert!(rx.try_recv().is_err());

        app.on_chat_reply(Ok(DISABLED_REPLY.to_string()));
        assert!(!app.chat().loading);
        assert_eq!(app.chat().messages.last().unwrap().text, DISABLED_REPLY);
    }

    #[test]
    fn submit_without_worker_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.open_chat();
        app.on_key(key(KeyCode::Char('a')));
        app.on_key(key(KeyCode::Enter));
        assert!(!app.chat().loading);
        assert_eq!(app.chat().messages.last().unwrap().text, FAILURE_REPLY);
    }

    #[test]
    fn scrolling_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.on_key(key(KeyCode::Up));
        assert_eq!(app.scroll(), 0);

        app.on_key(key(KeyCode::End));
        let bottom = app.scroll();
        assert!(bottom > 0);
        app.on_key(key(KeyCode::Down));
        assert_eq!(app.scroll(), bottom);

        app.on_key(key(KeyCode::Home));
        assert_eq!(app.scroll(), 0);
        assert_eq!(app.section(), Section::About);
    }

    #[test]
    fn tab_walks_sections() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.on_key(key(KeyCode::Tab));
        assert_eq!(app.section(), Section::News);
        let news = app.scroll();
        assert!(news > 0);

        app.on_key(key(KeyCode::Tab));
        assert_eq!(app.section(), Section::Publications);
        assert!(app.scroll() >= news);

        app.on_key(key(KeyCode::BackTab));
        assert_eq!(app.section(), Section::News);
        assert_eq!(app.scroll(), news);
    }

    #[test]
    fn typewriter_snapshot_is_shown() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.on_typewriter(Render {
            text: "LL".to_string(),
            style: Some("blue".to_string()),
            phrase_index: 0,
        });
        assert_eq!(app.typewriter().text, "LL");
    }
}

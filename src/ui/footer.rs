use crate::config::Theme;
use crate::ui::app::Focus;
use crate::ui::theme::palette;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const PAGE_HINTS: &str = " ↑↓/PgUp/PgDn: Scroll │ Tab: Section │ t: Theme │ c: Chat │ q: Quit";
const CHAT_HINTS: &str = " Enter: Send │ Backspace: Delete │ Esc: Close │ Ctrl+C: Quit";

pub struct Footer<'a> {
    focus: Focus,
    theme: Theme,
    error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(focus: Focus, theme: Theme, error: Option<&'a str>) -> Self {
        Self {
            focus,
            theme,
            error,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let colors = palette(self.theme);
        let hints = match self.focus {
            Focus::Page => PAGE_HINTS,
            Focus::Chat => CHAT_HINTS,
        };
        let version = format!("v{} ", VERSION);

        let text_style = Style::default().fg(colors.muted).add_modifier(Modifier::DIM);
        let mut spans = vec![Span::styled(hints, text_style)];
        let mut used = hints.chars().count();
        if let Some(error) = self.error {
            let error = format!(" │ {error}");
            used += error.chars().count();
            spans.push(Span::styled(error, Style::default().fg(colors.status_error)));
        }

        // Char count, not bytes: the hints contain box-drawing characters.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.border)),
            )
    }
}

use crate::config::Theme;
use crate::content::Profile;
use crate::ui::theme::palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    profile: &'a Profile,
    theme: Theme,
}

impl<'a> Header<'a> {
    pub fn new(profile: &'a Profile, theme: Theme) -> Self {
        Self { profile, theme }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let colors = palette(self.theme);
        let text_style = Style::default().fg(colors.text);
        let separator_style = Style::default().fg(colors.border);
        let mode = if self.theme.is_dark() { "☾ dark" } else { "☀ light" };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.profile.name.clone(),
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.profile.title.clone(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(mode, Style::default().fg(colors.accent)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(separator_style),
        )
    }
}

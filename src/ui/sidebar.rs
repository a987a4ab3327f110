//! Profile card shown left of the page on wide terminals.

use crate::config::Theme;
use crate::content::Profile;
use crate::ui::theme::palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn sidebar_lines(profile: &Profile, theme: Theme) -> Vec<Line<'static>> {
    let colors = palette(theme);
    let text = Style::default().fg(colors.text);
    let muted = Style::default().fg(colors.muted);
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.title.clone(),
            Style::default().fg(colors.accent),
        )),
        Line::from(Span::styled(profile.institution.clone(), muted)),
        Line::default(),
        Line::from(vec![Span::styled("⌖ ", muted), Span::styled(profile.location.clone(), text)]),
        Line::from(vec![Span::styled("✉ ", muted), Span::styled(profile.email.clone(), text)]),
    ];

    if let Some(lab) = profile.lab_link() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" ⌂ {} ", lab.name),
            Style::default()
                .fg(colors.background)
                .bg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            lab.url.clone(),
            muted.add_modifier(Modifier::UNDERLINED),
        )));
    }

    let socials: Vec<_> = profile.social_icons().collect();
    if !socials.is_empty() {
        lines.push(Line::default());
        for link in socials {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<9}", link.name),
                    Style::default().fg(colors.heading),
                ),
                Span::styled(link.url.clone(), muted),
            ]));
        }
    }

    if !profile.interests.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "RESEARCH INTERESTS",
            muted.add_modifier(Modifier::BOLD),
        )));
        for interest in &profile.interests {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(colors.accent)),
                Span::styled(interest.clone(), text),
            ]));
        }
    }
    lines
}

pub fn sidebar_widget(profile: &Profile, theme: Theme) -> Paragraph<'static> {
    let colors = palette(theme);
    Paragraph::new(sidebar_lines(profile, theme))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    #[test]
    fn lab_link_is_separate_from_socials() {
        let content = Content::builtin();
        let lines = sidebar_lines(&content.profile, Theme::Light);
        let text: Vec<String> = lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        let lab_rows = text.iter().filter(|t| t.contains("Lab Homepage")).count();
        assert_eq!(lab_rows, 1);
        assert!(text.iter().any(|t| t.starts_with("GitHub")));
    }
}

use crate::chat::ChatRole;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, centered_rect_by_size, inner, layout_regions};
use crate::ui::sidebar::sidebar_widget;
use crate::ui::theme::{palette, Palette};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const CHAT_WIDTH: u16 = 64;
const CHAT_HEIGHT: u16 = 20;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let theme = app.theme();
    let colors = palette(theme);
    frame.render_widget(Block::default().style(Style::default().bg(colors.background)), area);

    let (header, body, footer) = layout_regions(area);
    let profile = &app.content().profile;
    frame.render_widget(Header::new(profile, theme).widget(), header);

    let (sidebar, main) = body_columns(body);
    if let Some(sidebar) = sidebar {
        frame.render_widget(sidebar_widget(profile, theme), sidebar);
    }

    let page = app.page();
    let scroll = u16::try_from(app.scroll()).unwrap_or(u16::MAX);
    let page_widget = Paragraph::new(page.lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", app.section().title()),
                    Style::default().fg(colors.accent),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );
    frame.render_widget(page_widget, main);

    let footer_widget = Footer::new(app.focus(), theme, app.last_error());
    frame.render_widget(footer_widget.widget(footer), footer);

    if app.focus() == Focus::Chat {
        draw_chat(frame, app, body, &colors);
    }
}

fn draw_chat(frame: &mut Frame<'_>, app: &App, body: Rect, colors: &Palette) {
    let area = centered_rect_by_size(body, CHAT_WIDTH, CHAT_HEIGHT);
    frame.render_widget(Clear, area);

    let chat = app.chat();
    let mut lines = Vec::new();
    for message in &chat.messages {
        let (label, color) = match message.role {
            ChatRole::User => ("You", colors.user_bubble),
            ChatRole::Model => ("Twin", colors.model_bubble),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{label}: "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message.text.clone(), Style::default().fg(colors.text)),
        ]));
        lines.push(Line::default());
    }
    if chat.loading {
        lines.push(Line::from(Span::styled(
            "Twin is thinking…",
            Style::default()
                .fg(colors.muted)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let block = Block::default()
        .title(Span::styled(
            " AI Digital Twin ",
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent));
    let content = inner(area);
    frame.render_widget(block, area);

    let input_height = 1u16.min(content.height);
    let history_area = Rect {
        height: content.height.saturating_sub(input_height + 1),
        ..content
    };
    let input_area = Rect {
        y: content.y + content.height.saturating_sub(input_height),
        height: input_height,
        ..content
    };

    // Keep the newest message in view.
    let history = Paragraph::new(lines).wrap(Wrap { trim: false });
    let overflow = history
        .line_count(history_area.width)
        .saturating_sub(history_area.height as usize);
    let history = history.scroll((u16::try_from(overflow).unwrap_or(u16::MAX), 0));
    frame.render_widget(history, history_area);

    let prompt_style = if chat.loading {
        Style::default().fg(colors.muted)
    } else {
        Style::default().fg(colors.heading)
    };
    let cursor = if app.cursor_visible() { "▌" } else { " " };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("› ", Style::default().fg(colors.accent)),
        Span::styled(chat.input.clone(), prompt_style),
        Span::styled(cursor, Style::default().fg(colors.accent)),
    ]));
    frame.render_widget(input, input_area);
}
